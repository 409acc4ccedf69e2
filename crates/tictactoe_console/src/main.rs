//! Console tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, GameConfig, init_tracing, run};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load_or_default(&cli.config)?.with_overrides(cli.mode, cli.log_file);
    init_tracing(&config)?;

    run(&config)?;
    Ok(())
}
