use crate::{input::Error, ledger::process::Rejection};

use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;
use tracing::warn;

// Bad records and rejected operations are expected: they are the normal
// outcome of invalid or concurrent requests. We report them and keep going.
//
// Each handle yields how many errors its channel carried, once the channel is
// closed.
pub fn report(
    input_errors: Receiver<Error>,
    rejections: Receiver<Rejection>,
) -> Vec<JoinHandle<usize>> {
    vec![
        std::thread::spawn(move || {
            input_errors
                .iter()
                .inspect(|err| warn!(error = %err, "failed to read record"))
                .count()
        }),
        std::thread::spawn(move || {
            rejections
                .iter()
                .inspect(|rejection| {
                    warn!(
                        operation = ?rejection.operation,
                        error = %rejection.error,
                        "operation rejected"
                    )
                })
                .count()
        }),
    ]
}
