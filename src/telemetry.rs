//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber, filtered through `RUST_LOG`
/// (`info` by default).
///
/// Logs go to stderr, so they never mix with the CSV written to stdout.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
