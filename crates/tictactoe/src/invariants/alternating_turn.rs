//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, GameStatus, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show the X, O, X, O, ... pattern, and the current
/// player must be the next one due, or the winner once the game is won.
pub struct AlternatingTurnInvariant;

impl Invariant for AlternatingTurnInvariant {
    const DESCRIPTION: &'static str = "Players alternate turns (X, O, X, O, ...)";

    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        match (game.status(), history.last()) {
            (GameStatus::Won(winner), Some(last)) => {
                winner == last.player && game.current_player() == winner
            }
            (GameStatus::Won(_), None) => false,
            _ => {
                let expected_next = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                game.current_player() == expected_next
            }
        }
    }
}
