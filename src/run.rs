use crate::config::Config;
use crate::ledger::{process::process, AccountStore, LedgerError, LedgerService};
use crate::{error_handler, input, output};

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] LedgerError),

    #[error("failed to write accounts: {0}")]
    Output(#[from] csv::Error),

    #[error("a ledger thread panicked")]
    ThreadPanicked,
}

/// What happened during a run.
#[derive(Debug, PartialEq)]
pub struct Summary {
    /// Accounts left in the ledger.
    pub accounts: usize,

    /// Records that couldn't be read, and operations the ledger refused.
    pub rejected: usize,
}

/// Replay every operation of `input_stream` against a fresh ledger, then
/// write the resulting accounts to `output_stream`.
///
/// The pipeline runs on several threads: one decodes the input, `workers`
/// apply the operations, and two report errors as they come.
pub fn run(
    input_stream: (impl std::io::Read + Send + 'static),
    output_stream: impl std::io::Write,
    config: &Config,
) -> Result<Summary, Error> {
    let service = Arc::new(LedgerService::new(
        AccountStore::new(),
        config.default_initial_balance()?,
    ));

    let (operations, input_errors) = input::parse(input_stream);
    let (rejections, workers) = process(Arc::clone(&service), operations, config.workers);
    let reporters = error_handler::report(input_errors, rejections);

    // Workers stop once the input is exhausted. Joining them means the ledger
    // has reached its final state.
    for worker in workers {
        worker.join().map_err(|_| Error::ThreadPanicked)?;
    }
    let rejected = reporters
        .into_iter()
        .map(|reporter| reporter.join().map_err(|_| Error::ThreadPanicked))
        .sum::<Result<usize, Error>>()?;

    let accounts = service.list_all();
    let summary = Summary {
        accounts: accounts.len(),
        rejected,
    };
    output::write(output_stream, accounts)?;

    info!(
        accounts = summary.accounts,
        rejected = summary.rejected,
        "ledger replayed"
    );
    Ok(summary)
}
