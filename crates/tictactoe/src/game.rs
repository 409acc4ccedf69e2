//! Turn and board state for a single game.

use super::action::{Move, MoveError};
use super::invariants;
use super::rules::check_win;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of turns after which a game without a winner is drawn.
const MAX_TURNS: u8 = 9;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state: board, whose turn it is, and how far the game got.
///
/// `turn` counts completed turns that did not end the game with a win, so it
/// runs 0-8 while playing and reaches 9 only on a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) turn: u8,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move it is (or who made the winning move).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the turn counter.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the winner, if the game has one.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Places the current player's mark and advances the game.
    ///
    /// The board is checked for a win by the player who just moved; if there
    /// is none, the turn passes to the opponent and the turn counter
    /// increments, drawing the game when it reaches 9.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game is already finished
    /// - `MoveError::SquareOccupied` if the square is taken; the state is unchanged
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turn))]
    pub fn apply(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board.place(position, player)?;
        self.history.push(Move::new(player, position));

        if check_win(&self.board, player) {
            self.status = GameStatus::Won(player);
        } else {
            self.current_player = player.opponent();
            self.turn += 1;
            if self.turn == MAX_TURNS {
                self.status = GameStatus::Draw;
            }
        }

        debug!(board = %self.board, status = ?self.status, "Move applied");

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(self.status)
    }

    /// Replays positions from a fresh game, alternating players from X.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for position in positions {
            game.apply(*position)?;
        }
        Ok(game)
    }

    /// Verifies all game invariants, folding violations into one error.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        let broken = invariants::broken(self);
        if broken.is_empty() {
            return Ok(());
        }
        Err(MoveError::InvariantViolation(format!(
            "Postcondition failed: {}",
            broken.join("; ")
        )))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
