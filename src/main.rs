//! AbanRemit ledger CLI
//!
//! Replays a CSV action script against the wallet ledger and prints the final
//! user table to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- actions.csv > users.csv
//! cargo run -- --config ledger.toml actions.csv > users.csv
//! cargo run -- --statement statement.csv actions.csv > users.csv
//! RUST_LOG=debug cargo run -- actions.csv
//! ```
//!
//! Logs go to stderr so stdout stays a clean CSV stream.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad configuration, script not found, output not writable, etc.)

use abanremit_ledger::{cli, config, runner, AppConfig, LedgerError};
use std::fs::File;
use std::io::Write;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        error!(error = %e, "Run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), LedgerError> {
    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };

    let mut statement_file = args.statement.as_ref().map(File::create).transpose()?;
    let statements = statement_file.as_mut().map(|file| file as &mut dyn Write);

    let mut output = std::io::stdout();
    runner::run_script(&config, &args.input_file, &mut output, statements)?;
    Ok(())
}
