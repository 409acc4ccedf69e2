//! Input and game-loop error types.

use tictactoe::{MoveError, Position};

/// Error reading a move from the player.
///
/// Everything except `Io` is a user mistake: the game loop reports it on
/// stderr and asks again.
#[derive(Debug, derive_more::Display)]
pub enum InputError {
    /// Wrong token count or a token that is not a single digit.
    #[display("Incorrectly formatted input, please type two integers 'y,x'")]
    Malformed,

    /// Coordinates outside the 3x3 board.
    #[display("Error, position ({}, {}) is out of bounds", row, col)]
    OutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
    },

    /// The square already holds a mark.
    #[display("Error, position ({}, {}) is already taken", row, col)]
    Occupied {
        /// Row of the occupied square.
        row: usize,
        /// Column of the occupied square.
        col: usize,
    },

    /// Reading from the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl InputError {
    /// Builds the occupied-square error for a position.
    pub fn occupied(position: Position) -> Self {
        InputError::Occupied {
            row: position.row(),
            col: position.col(),
        }
    }

    /// Returns true if the game loop should re-prompt instead of failing.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::Io(_))
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Fatal error that ends the game loop.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Terminal input or output failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The game engine rejected a move the loop had already validated.
    #[display("Game rule violation: {}", _0)]
    Rules(MoveError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            GameError::Rules(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_console_wording() {
        assert_eq!(
            InputError::Malformed.to_string(),
            "Incorrectly formatted input, please type two integers 'y,x'"
        );
        assert_eq!(
            InputError::OutOfBounds { row: 9, col: 9 }.to_string(),
            "Error, position (9, 9) is out of bounds"
        );
        assert_eq!(
            InputError::occupied(Position::MiddleRight).to_string(),
            "Error, position (1, 2) is already taken"
        );
    }

    #[test]
    fn test_only_io_is_fatal() {
        assert!(InputError::Malformed.is_recoverable());
        assert!(InputError::OutOfBounds { row: 3, col: 0 }.is_recoverable());
        let io = InputError::from(std::io::Error::other("gone"));
        assert!(!io.is_recoverable());
    }
}
