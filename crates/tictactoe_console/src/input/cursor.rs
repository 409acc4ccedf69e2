//! Key-based input: move a cursor with the arrow keys, place with Enter.

use super::{InputReader, PlayerInput};
use crate::error::InputError;
use crate::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use ratatui::{Terminal, backend::Backend};
use std::io;
use tictactoe::{GameState, Position};
use tracing::{debug, info, instrument, warn};

/// Moves cursor based on arrow keys, wrapping around the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.wrapping_offset(-1, 0),
        KeyCode::Down => cursor.wrapping_offset(1, 0),
        KeyCode::Left => cursor.wrapping_offset(0, -1),
        KeyCode::Right => cursor.wrapping_offset(0, 1),
        _ => cursor,
    }
}

/// A source of key presses plus the terminal mode needed to read them.
pub trait KeySource {
    /// Blocks until the next key press.
    fn next_key(&mut self) -> io::Result<KeyEvent>;

    /// Prepares the terminal for key-by-key reading.
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Restores the terminal to its normal mode.
    fn leave(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads keys from the real terminal in raw mode on the alternate screen.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }

    fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
    }

    fn leave(&mut self) -> io::Result<()> {
        execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
        disable_raw_mode()
    }
}

/// Holds the terminal in key-reading mode; restores it on drop.
struct TerminalScope<'a, K: KeySource> {
    keys: &'a mut K,
}

impl<'a, K: KeySource> TerminalScope<'a, K> {
    fn enter(keys: &'a mut K) -> io::Result<Self> {
        if let Err(err) = keys.enter() {
            let _ = keys.leave();
            return Err(err);
        }
        Ok(Self { keys })
    }

    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.keys.next_key()
    }
}

impl<K: KeySource> Drop for TerminalScope<'_, K> {
    fn drop(&mut self) {
        if let Err(e) = self.keys.leave() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn backend_error(err: impl std::fmt::Display) -> InputError {
    InputError::Io(io::Error::other(err.to_string()))
}

/// Arrow-key move selection drawn with ratatui.
///
/// The cursor position carries over between turns.
pub struct CursorReader<K: KeySource, B: Backend> {
    keys: K,
    terminal: Terminal<B>,
    cursor: Position,
}

impl<K: KeySource, B: Backend> CursorReader<K, B> {
    /// Creates a reader with the cursor on the center square.
    pub fn new(keys: K, terminal: Terminal<B>) -> Self {
        Self {
            keys,
            terminal,
            cursor: Position::Center,
        }
    }

    /// Returns the current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the key source.
    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Returns the terminal the board is drawn on.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<K: KeySource, B: Backend> InputReader for CursorReader<K, B>
where
    B::Error: std::fmt::Display,
{
    #[instrument(skip_all, fields(player = %state.current_player(), turn = state.turn()))]
    fn read_input(&mut self, state: &GameState) -> Result<PlayerInput, InputError> {
        let mut scope = TerminalScope::enter(&mut self.keys)?;
        self.terminal.clear().map_err(backend_error)?;

        let mut notice: Option<String> = None;
        loop {
            let status = notice.clone().unwrap_or_else(|| {
                format!(
                    "Turn {} - player {} to move",
                    state.turn(),
                    state.current_player()
                )
            });
            let cursor = self.cursor;
            self.terminal
                .draw(|frame| ui::draw(frame, state.board(), cursor, &status))
                .map_err(backend_error)?;

            let key = scope.next_key()?;
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    info!("Exit requested");
                    return Ok(PlayerInput::Exit);
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    info!("Interrupted");
                    return Ok(PlayerInput::Exit);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if state.board().is_empty(self.cursor) {
                        return Ok(PlayerInput::Move(self.cursor));
                    }
                    let err = InputError::occupied(self.cursor);
                    debug!(error = %err, "Cursor on occupied square");
                    notice = Some(err.to_string());
                }
                code => {
                    self.cursor = move_cursor(self.cursor, code);
                    notice = None;
                }
            }
        }
    }

    fn wants_prompt(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedKeys {
        keys: VecDeque<KeyEvent>,
        entered: usize,
        left: usize,
    }

    impl ScriptedKeys {
        fn new(codes: &[KeyCode]) -> Self {
            Self {
                keys: codes
                    .iter()
                    .map(|code| KeyEvent::new(*code, KeyModifiers::NONE))
                    .collect(),
                ..Self::default()
            }
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> io::Result<KeyEvent> {
            self.keys
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn enter(&mut self) -> io::Result<()> {
            self.entered += 1;
            Ok(())
        }

        fn leave(&mut self) -> io::Result<()> {
            self.left += 1;
            Ok(())
        }
    }

    fn reader(keys: ScriptedKeys) -> CursorReader<ScriptedKeys, TestBackend> {
        let terminal = Terminal::new(TestBackend::new(50, 24)).unwrap();
        CursorReader::new(keys, terminal)
    }

    fn screen(reader: &CursorReader<ScriptedKeys, TestBackend>) -> String {
        reader
            .terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_move_cursor_wraps() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }

    #[test]
    fn test_arrows_then_enter_selects() {
        let mut reader = reader(ScriptedKeys::new(&[KeyCode::Right, KeyCode::Enter]));

        let input = reader.read_input(&GameState::new()).unwrap();

        assert_eq!(input, PlayerInput::Move(Position::MiddleRight));
        assert_eq!(reader.keys().entered, 1);
        assert_eq!(reader.keys().left, 1);
    }

    #[test]
    fn test_cursor_wraps_vertically() {
        let mut reader = reader(ScriptedKeys::new(&[KeyCode::Up, KeyCode::Up, KeyCode::Enter]));

        let input = reader.read_input(&GameState::new()).unwrap();

        assert_eq!(input, PlayerInput::Move(Position::BottomCenter));
        assert_eq!(reader.cursor(), Position::BottomCenter);
    }

    #[test]
    fn test_occupied_square_shows_inline_message() {
        let state = GameState::replay(&[Position::Center]).unwrap();
        let before = state.clone();
        let mut reader = reader(ScriptedKeys::new(&[KeyCode::Enter, KeyCode::Esc]));

        let input = reader.read_input(&state).unwrap();

        assert_eq!(input, PlayerInput::Exit);
        assert!(screen(&reader).contains("already taken"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_ctrl_c_exits() {
        let mut keys = ScriptedKeys::default();
        keys.keys
            .push_back(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let mut reader = reader(keys);

        assert_eq!(
            reader.read_input(&GameState::new()).unwrap(),
            PlayerInput::Exit
        );
    }

    #[test]
    fn test_terminal_restored_when_read_fails() {
        let mut reader = reader(ScriptedKeys::new(&[KeyCode::Left]));

        let result = reader.read_input(&GameState::new());

        assert!(matches!(result, Err(InputError::Io(_))));
        assert_eq!(reader.keys().entered, 1);
        assert_eq!(reader.keys().left, 1);
    }

    #[test]
    fn test_no_text_prompt() {
        let reader = reader(ScriptedKeys::default());
        assert!(!reader.wants_prompt());
    }
}
