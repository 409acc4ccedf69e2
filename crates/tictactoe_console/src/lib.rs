//! Console front end for tic-tac-toe.
//!
//! # Architecture
//!
//! - **Input**: [`InputReader`] with a line-based [`LineReader`] (`y,x` coordinates)
//!   and a key-based [`CursorReader`] (arrow keys in raw mode)
//! - **Renderer**: [`Renderer`] writes the grid and messages, plain or ANSI colored
//! - **Game loop**: [`play`] drives reader → board → rules → renderer until the game ends
//! - **Config**: [`GameConfig`] from TOML, overridden by [`Cli`] flags
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::GameState;
//! use tictactoe_console::{Ending, LineReader, RenderStyle, Renderer, play};
//!
//! # fn example() -> Result<(), tictactoe_console::GameError> {
//! let mut reader = LineReader::new(Cursor::new("0,0\n1,1\n0,1\n1,0\n0,2\n"));
//! let mut renderer = Renderer::new(Vec::new(), Vec::new(), RenderStyle::Plain);
//!
//! let (_state, ending) = play(GameState::new(), &mut reader, &mut renderer)?;
//! assert_eq!(ending, Ending::Won(tictactoe::Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod error;
mod game_loop;
mod input;
mod logging;
mod mode;
mod render;
mod ui;

pub use app::run;
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use error::{GameError, InputError};
pub use game_loop::{Ending, play};
pub use input::{
    CrosstermKeys, CursorReader, InputReader, KeySource, LineReader, PlayerInput, move_cursor,
    parse_coordinates, parse_move,
};
pub use logging::init_tracing;
pub use mode::GameMode;
pub use render::{RenderStyle, Renderer, format_grid};
