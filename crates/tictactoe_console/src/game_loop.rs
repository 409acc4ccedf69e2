//! The turn loop: read, place, render, check for the end.

use crate::error::{GameError, InputError};
use crate::input::{InputReader, PlayerInput};
use crate::render::Renderer;
use std::io::Write;
use tictactoe::{GameState, GameStatus, MoveError, Player};
use tracing::{debug, info, instrument, warn};

/// How a run of the game loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// A player completed a line.
    Won(Player),
    /// Nine turns without a winner.
    Draw,
    /// The player typed the exit command (or input closed).
    Exited,
}

/// Plays until the game is won, drawn, or abandoned.
///
/// Rejected input is reported on the renderer's error stream and the
/// player is asked again; the board and turn are untouched. The state is
/// handed back alongside the ending.
///
/// # Errors
///
/// Returns `GameError::Io` if reading or writing the console fails.
#[instrument(skip_all)]
pub fn play<R, W, E>(
    mut state: GameState,
    reader: &mut R,
    renderer: &mut Renderer<W, E>,
) -> Result<(GameState, Ending), GameError>
where
    R: InputReader + ?Sized,
    W: Write,
    E: Write,
{
    info!("Game started");

    loop {
        if reader.wants_prompt() {
            renderer.prompt(&state)?;
        }

        let position = match reader.read_input(&state) {
            Ok(PlayerInput::Move(position)) => position,
            Ok(PlayerInput::Exit) => {
                info!(turn = state.turn(), "Player exited");
                renderer.exiting()?;
                return Ok((state, Ending::Exited));
            }
            Err(InputError::Io(err)) => return Err(GameError::Io(err)),
            Err(err) => {
                warn!(error = %err, "Rejected input");
                renderer.error(&err)?;
                continue;
            }
        };

        let player = state.current_player();
        let status = match state.apply(position) {
            Ok(status) => status,
            Err(MoveError::SquareOccupied(position)) => {
                renderer.error(&InputError::occupied(position))?;
                continue;
            }
            Err(err) => return Err(GameError::Rules(err)),
        };
        debug!(%player, row = position.row(), col = position.col(), "Move accepted");

        renderer.played(state.board(), player, position)?;

        match status {
            GameStatus::Won(winner) => {
                info!(%winner, turn = state.turn(), "Game won");
                renderer.won(winner)?;
                return Ok((state, Ending::Won(winner)));
            }
            GameStatus::Draw => {
                info!("Game drawn");
                renderer.tie()?;
                return Ok((state, Ending::Draw));
            }
            GameStatus::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderStyle;
    use std::collections::VecDeque;
    use tictactoe::Position;

    /// Hands out pre-baked inputs without checking the board.
    struct Scripted(VecDeque<PlayerInput>);

    impl InputReader for Scripted {
        fn read_input(&mut self, _state: &GameState) -> Result<PlayerInput, InputError> {
            Ok(self.0.pop_front().unwrap_or(PlayerInput::Exit))
        }

        fn wants_prompt(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_occupied_square_from_engine_is_reported() {
        // A reader that skips the occupied check still cannot overwrite a square
        let mut reader = Scripted(VecDeque::from([
            PlayerInput::Move(Position::Center),
            PlayerInput::Move(Position::Center),
        ]));
        let mut renderer = Renderer::new(Vec::new(), Vec::new(), RenderStyle::Plain);

        let (state, ending) = play(GameState::new(), &mut reader, &mut renderer).unwrap();

        assert_eq!(ending, Ending::Exited);
        assert_eq!(state.turn(), 1);
        let (out, err) = renderer.into_inner();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error, position (1, 1) is already taken\n"
        );
        assert!(!String::from_utf8(out).unwrap().contains("Turn"));
    }

    #[test]
    fn test_io_failure_is_fatal() {
        struct Broken;
        impl InputReader for Broken {
            fn read_input(&mut self, _state: &GameState) -> Result<PlayerInput, InputError> {
                Err(InputError::Io(std::io::Error::other("tty gone")))
            }
        }

        let mut renderer = Renderer::new(Vec::new(), Vec::new(), RenderStyle::Plain);
        let result = play(GameState::new(), &mut Broken, &mut renderer);
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
