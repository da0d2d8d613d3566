//! Command-line interface for the tic-tac-toe terminal.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file (overrides `log_file` in the config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
