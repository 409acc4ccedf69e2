//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must place every mark on an
/// empty square and end at the current board.
pub struct MonotonicBoardInvariant;

impl Invariant for MonotonicBoardInvariant {
    const DESCRIPTION: &'static str = "Board squares are monotonic (never overwritten)";

    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }
}
