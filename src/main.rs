use account_ledger::{cli::Cli, run::run, telemetry};

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init();

    let config = cli.config();
    let output = std::io::stdout().lock();

    match &cli.input {
        Some(path) => {
            let input = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run(input, output, &config)?;
        }
        None => {
            run(std::io::stdin(), output, &config)?;
        }
    }

    Ok(())
}
