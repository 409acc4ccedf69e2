//! Wires the configured reader and renderer to the game loop.

use crate::config::GameConfig;
use crate::game_loop::{Ending, play};
use crate::input::{CrosstermKeys, CursorReader, InputReader, LineReader};
use crate::mode::GameMode;
use crate::render::Renderer;
use anyhow::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe::GameState;
use tracing::{info, instrument};

/// Runs one game on the real terminal in the configured mode.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub fn run(config: &GameConfig) -> Result<Ending> {
    let mode = *config.mode();
    info!(name = mode.name(), "Starting game");

    let stdin = io::stdin();
    let mut reader: Box<dyn InputReader> = match mode {
        GameMode::Plain | GameMode::Color => Box::new(LineReader::new(stdin.lock())),
        GameMode::Cursor => {
            let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            Box::new(CursorReader::new(CrosstermKeys, terminal))
        }
    };

    let mut renderer = Renderer::new(io::stdout(), io::stderr(), mode.render_style());
    let (state, ending) = play(GameState::new(), reader.as_mut(), &mut renderer)?;

    info!(?ending, moves = state.history().len(), "Game finished");
    Ok(ending)
}
