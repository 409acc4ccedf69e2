//! Properties every reachable game state satisfies.
//!
//! [`GameState::apply`](crate::GameState::apply) checks them after each move
//! in debug builds.

use crate::GameState;

mod alternating_turn;
mod history_consistent;
mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A property of [`GameState`] that no sequence of legal moves can break.
pub trait Invariant {
    /// Short statement of the property, reported when it breaks.
    const DESCRIPTION: &'static str;

    /// Returns true if the property holds for `game`.
    fn holds(game: &GameState) -> bool;
}

type Check = (fn(&GameState) -> bool, &'static str);

const CHECKS: [Check; 3] = [
    (
        MonotonicBoardInvariant::holds,
        MonotonicBoardInvariant::DESCRIPTION,
    ),
    (
        AlternatingTurnInvariant::holds,
        AlternatingTurnInvariant::DESCRIPTION,
    ),
    (
        HistoryConsistentInvariant::holds,
        HistoryConsistentInvariant::DESCRIPTION,
    ),
];

/// Returns the description of every invariant `game` breaks, in check order.
pub fn broken(game: &GameState) -> Vec<&'static str> {
    CHECKS
        .iter()
        .filter(|(holds, _)| !holds(game))
        .map(|(_, description)| *description)
        .collect()
}
