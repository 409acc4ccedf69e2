//! Move input: typed coordinates or arrow-key cursor.

mod cursor;
mod line;

pub use cursor::{CrosstermKeys, CursorReader, KeySource, move_cursor};
pub use line::{LineReader, parse_coordinates, parse_move};

use crate::error::InputError;
use tictactoe::{GameState, Position};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Place the current player's mark here.
    Move(Position),
    /// Leave the game immediately.
    Exit,
}

/// Source of player moves.
pub trait InputReader {
    /// Reads the next move for the current player.
    ///
    /// A returned `Move` always names an empty square of `state`'s board
    /// unless the reader reports `InputError::Occupied` instead.
    fn read_input(&mut self, state: &GameState) -> Result<PlayerInput, InputError>;

    /// Whether the game loop should print a text prompt before each read.
    fn wants_prompt(&self) -> bool {
        true
    }
}
