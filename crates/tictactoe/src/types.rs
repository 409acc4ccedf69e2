//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (player one, goes first).
    X,
    /// Player O (player two).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player draws on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares only ever go from empty to occupied; [`Board::place`] is the
/// only public way to change one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Overwrites a square without checking it (used to build corrupted states in tests).
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the three squares of a row (0-2).
    pub fn row(&self, row: usize) -> [Square; 3] {
        let start = row * 3;
        [
            self.squares[start],
            self.squares[start + 1],
            self.squares[start + 2],
        ]
    }

    /// Counts occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact single-line-per-row form, used in log output.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                f.write_str("/")?;
            }
            for square in self.row(row) {
                let c = square.player().map_or('.', Player::symbol);
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_place_marks_square() {
        let mut board = Board::new();
        board.place(Position::Center, Player::O).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();

        let result = board.place(Position::TopLeft, Player::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
        // Never reverts or changes owner
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_row_access() {
        let mut board = Board::new();
        board.place(Position::MiddleLeft, Player::X).unwrap();
        board.place(Position::MiddleRight, Player::O).unwrap();
        assert_eq!(
            board.row(1),
            [
                Square::Occupied(Player::X),
                Square::Empty,
                Square::Occupied(Player::O)
            ]
        );
    }

    #[test]
    fn test_display_compact() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::BottomRight, Player::O).unwrap();
        assert_eq!(board.to_string(), "X../.../..O");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.to_string(), "X");
    }
}
