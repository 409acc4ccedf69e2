//! History consistency invariant: history matches the board and turn counter.

use super::Invariant;
use crate::{GameState, GameStatus};

/// Invariant: every move in history corresponds to exactly one occupied
/// square, and the turn counter counts every move except a winning one.
pub struct HistoryConsistentInvariant;

impl Invariant for HistoryConsistentInvariant {
    const DESCRIPTION: &'static str = "History length matches occupied squares and turn counter";

    fn holds(game: &GameState) -> bool {
        let moves = game.history().len();

        if moves != game.board().occupied() {
            return false;
        }

        let expected_turn = match game.status() {
            GameStatus::Won(_) => moves.saturating_sub(1),
            GameStatus::InProgress | GameStatus::Draw => moves,
        };
        usize::from(game.turn()) == expected_turn
    }
}
