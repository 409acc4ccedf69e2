//! Command-line interface for the tictactoe binary.

use crate::mode::GameMode;
use clap::Parser;
use std::path::PathBuf;

/// Console tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input and rendering mode (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Path to the config file, used only if it exists
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
