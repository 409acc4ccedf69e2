//! Line-based input: `y,x` coordinates typed at a prompt.

use super::{InputReader, PlayerInput};
use crate::error::InputError;
use std::io::BufRead;
use tictactoe::{Board, GameState, Position};
use tracing::{debug, instrument};

/// Word that ends the game from the prompt.
const EXIT_KEYWORD: &str = "exit";

/// Removes a trailing `\n` or `\r\n`, nothing else.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

/// Parses `"y,x"` into row and column digits.
///
/// Each token must be exactly one ASCII digit with no surrounding
/// whitespace; larger digits are reported as out of bounds.
pub fn parse_coordinates(input: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = strip_line_ending(input).split(',').collect();

    let [row, col] = tokens.as_slice() else {
        return Err(InputError::Malformed);
    };

    let digit = |token: &str| -> Result<u32, InputError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).ok_or(InputError::Malformed),
            _ => Err(InputError::Malformed),
        }
    };

    let (row, col) = (digit(*row)?, digit(*col)?);
    if row > 2 || col > 2 {
        return Err(InputError::OutOfBounds { row, col });
    }
    Ok((row as usize, col as usize))
}

/// Parses one input line against the current board.
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> Result<PlayerInput, InputError> {
    if strip_line_ending(input) == EXIT_KEYWORD {
        return Ok(PlayerInput::Exit);
    }

    let (row, col) = parse_coordinates(input)?;
    let position = Position::from_coords(row, col).ok_or(InputError::OutOfBounds {
        row: row as u32,
        col: col as u32,
    })?;

    if !board.is_empty(position) {
        return Err(InputError::occupied(position));
    }
    Ok(PlayerInput::Move(position))
}

/// Reads moves one line at a time.
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a reader over any buffered input (usually locked stdin).
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> InputReader for LineReader<R> {
    fn read_input(&mut self, state: &GameState) -> Result<PlayerInput, InputError> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            debug!("Input closed, treating as exit");
            return Ok(PlayerInput::Exit);
        }
        let Ok(line) = std::str::from_utf8(&self.line) else {
            debug!(bytes = self.line.len(), "Input line is not UTF-8");
            return Err(InputError::Malformed);
        };
        parse_move(line, state.board())
    }
}
