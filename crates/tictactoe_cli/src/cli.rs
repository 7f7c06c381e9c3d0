//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against the computer, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the opponent's random choices, overriding the config
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file, overriding the config
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
