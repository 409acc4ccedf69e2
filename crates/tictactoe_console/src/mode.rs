//! Game mode selection.

use crate::render::RenderStyle;
use serde::{Deserialize, Serialize};

/// How moves are entered and how the board is drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Typed `y,x` coordinates, no escape codes.
    Plain,
    /// Typed `y,x` coordinates, ANSI colors.
    #[default]
    Color,
    /// Arrow keys and Enter in raw terminal mode, ANSI colors.
    Cursor,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::Plain => "Plain text",
            GameMode::Color => "Colored text",
            GameMode::Cursor => "Arrow-key cursor",
        }
    }

    /// Rendering style used for the scrollback output of this mode.
    pub fn render_style(self) -> RenderStyle {
        match self {
            GameMode::Plain => RenderStyle::Plain,
            GameMode::Color | GameMode::Cursor => RenderStyle::Colored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_color() {
        assert_eq!(GameMode::default(), GameMode::Color);
    }

    #[test]
    fn test_lowercase_names() {
        assert_eq!(GameMode::Cursor.to_string(), "cursor");
        assert_eq!(GameMode::from_str("plain").unwrap(), GameMode::Plain);
    }

    #[test]
    fn test_render_style() {
        assert_eq!(GameMode::Plain.render_style(), RenderStyle::Plain);
        assert_eq!(GameMode::Cursor.render_style(), RenderStyle::Colored);
    }
}
