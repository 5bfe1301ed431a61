use clap::Parser;
use std::path::PathBuf;

/// Replay an action script against the AbanRemit wallet ledger
#[derive(Parser, Debug)]
#[command(name = "abanremit")]
#[command(about = "Replay wallet actions and print the resulting user table", long_about = None)]
pub struct CliArgs {
    /// Action script CSV (`action,phone,password,amount,method,counterparty,detail,pin`)
    #[arg(value_name = "INPUT", help = "Path to the action script CSV")]
    pub input_file: PathBuf,

    /// TOML configuration overriding the demo seed
    #[arg(
        long = "config",
        value_name = "FILE",
        help = "TOML file with users, currencies, fees and verification codes"
    )]
    pub config: Option<PathBuf>,

    /// Where statement exports are written
    #[arg(
        long = "statement",
        value_name = "FILE",
        help = "Write a statement CSV here after each successful 'statement' action"
    )]
    pub statement: Option<PathBuf>,
}
