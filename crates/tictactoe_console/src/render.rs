//! Text rendering of the board and game messages.
//!
//! Output goes to one writer (stdout) and input errors to another (stderr).
//! Colored output uses crossterm styling; plain output has no escape codes.

use crate::error::InputError;
use crossterm::style::{Color, Stylize};
use std::io::{self, Write};
use tictactoe::{Board, GameState, Player, Position};
use tracing::instrument;

/// Indentation in front of each grid row.
const GRID_INDENT: &str = "        ";
/// Rule printed above and below the grid.
const FRAME_WIDTH: usize = 26;

/// Whether output carries ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// No escape codes.
    Plain,
    /// ANSI foreground colors.
    Colored,
}

impl RenderStyle {
    fn paint(self, text: &str, color: Color) -> String {
        match self {
            RenderStyle::Plain => text.to_string(),
            RenderStyle::Colored => text.with(color).to_string(),
        }
    }

    fn mark(self, player: Player) -> String {
        let color = match player {
            Player::X => Color::Red,
            Player::O => Color::Blue,
        };
        self.paint(&player.symbol().to_string(), color)
    }
}

/// Formats the 3x3 grid, one line per row and separator.
pub fn format_grid(board: &Board, style: RenderStyle) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            let cells: Vec<String> = board
                .row(row)
                .iter()
                .map(|square| match square.player() {
                    Some(player) => style.mark(player),
                    None => " ".to_string(),
                })
                .collect();
            format!("{}{}", GRID_INDENT, cells.join(style.paint(" | ", Color::Grey).as_str()))
        })
        .collect();

    let separator = format!("{}{}", GRID_INDENT, style.paint(&"-".repeat(9), Color::Grey));
    rows.join(format!("\n{}\n", separator).as_str())
}

/// Writes prompts, boards, and results.
#[derive(Debug)]
pub struct Renderer<W: Write, E: Write> {
    out: W,
    err: E,
    style: RenderStyle,
}

impl<W: Write, E: Write> Renderer<W, E> {
    /// Creates a renderer over the given output and error writers.
    pub fn new(out: W, err: E, style: RenderStyle) -> Self {
        Self { out, err, style }
    }

    /// Consumes the renderer, returning the output and error writers.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Asks the current player for a move.
    pub fn prompt(&mut self, state: &GameState) -> io::Result<()> {
        let text = format!(
            "Turn {}, please enter your move 'y,x', player ",
            state.turn()
        );
        writeln!(
            self.out,
            "{}{}",
            self.style.paint(&text, Color::Cyan),
            self.style.mark(state.current_player())
        )?;
        self.out.flush()
    }

    /// Shows the move just made and the resulting grid.
    #[instrument(skip(self, board))]
    pub fn played(&mut self, board: &Board, player: Player, position: Position) -> io::Result<()> {
        let style = self.style;
        let rule = style.paint(&"=".repeat(FRAME_WIDTH), Color::Grey);
        writeln!(
            self.out,
            "{}{}{}",
            style.paint("Player ", Color::Grey),
            style.mark(player),
            style.paint(
                &format!(" played ({}, {})", position.row(), position.col()),
                Color::Grey
            )
        )?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", format_grid(board, style))?;
        writeln!(self.out, "{}", rule)?;
        self.out.flush()
    }

    /// Announces the winner.
    pub fn won(&mut self, player: Player) -> io::Result<()> {
        let style = self.style;
        writeln!(
            self.out,
            "{}{}{}",
            style.paint("Player ", Color::Green),
            style.mark(player),
            style.paint(" won!", Color::Green)
        )?;
        self.out.flush()
    }

    /// Announces a draw.
    pub fn tie(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.style.paint("Tie!", Color::Yellow))?;
        self.out.flush()
    }

    /// Acknowledges the exit command.
    pub fn exiting(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.style.paint("Exiting...", Color::Red))?;
        self.out.flush()
    }

    /// Reports rejected input on the error stream.
    pub fn error(&mut self, error: &InputError) -> io::Result<()> {
        writeln!(self.err, "{}", error)?;
        self.err.flush()
    }
}
