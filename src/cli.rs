use crate::config::Config;
use crate::ledger::Amount;

use clap::Parser;
use std::path::PathBuf;

/// Replay a CSV stream of ledger operations, then print every account.
///
/// Input columns: op,account,to,amount. Output columns: account,balance.
#[derive(Debug, Parser)]
#[command(name = "account_ledger")]
#[command(version)]
pub struct Cli {
    /// CSV file of operations (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Initial balance of accounts created without an amount
    #[arg(long, env = "LEDGER_DEFAULT_AMOUNT", default_value = "0")]
    pub default_amount: Amount,

    /// Number of threads applying operations concurrently
    #[arg(short, long, env = "LEDGER_WORKERS", default_value_t = 1)]
    pub workers: usize,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            default_initial_amount: self.default_amount,
            workers: self.workers,
        }
    }
}
