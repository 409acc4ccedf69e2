//! Tic-tac-toe game logic with no terminal dependencies.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], and [`Position`] describe the grid
//! - **Rules**: pure functions for win and draw detection
//! - **Game**: [`GameState`] owns the board, the turn counter, and the status
//! - **Invariants**: postconditions checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, GameStatus, Player, Position};
//!
//! # fn example() -> Result<(), tictactoe::MoveError> {
//! let mut game = GameState::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::TopRight,
//! ] {
//!     game.apply(pos)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameState, GameStatus};
pub use position::Position;
pub use rules::{check_win, check_winner, is_draw, is_full};
pub use types::{Board, Player, Square};
