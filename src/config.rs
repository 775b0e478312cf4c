//! Game settings
//!
//! Settings come from defaults, an optional TOML file and command-line
//! overrides, in that order. Example file:
//!
//! ```toml
//! grid_width = 4
//! grid_height = 4
//! win_length = 3
//! player_x = "human"
//! player_o = "ai"
//! depth = 6
//! heuristic = "line-squares"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Mark};
use crate::error::{Error, Result};
use crate::eval::Heuristic;

/// Who makes the moves for one mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Ai,
}

/// Settings consumed by the session and the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Columns
    pub grid_width: usize,
    /// Rows
    pub grid_height: usize,
    /// Run length needed to win
    pub win_length: usize,
    pub player_x: PlayerKind,
    pub player_o: PlayerKind,
    /// Search depth; picked from the grid size when absent
    pub depth: Option<u32>,
    /// Evaluator used at the depth cut-off
    pub heuristic: Heuristic,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: 3,
            grid_height: 3,
            win_length: 3,
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Human,
            depth: None,
            heuristic: Heuristic::LineSquares,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject sizes the game cannot be played on.
    ///
    /// Win lengths longer than the board are allowed; such games can only
    /// end in a draw.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.win_length == 0 {
            return Err(Error::InvalidWinLength(self.win_length));
        }
        Ok(())
    }

    /// Fresh empty board of the configured size
    pub fn new_board(&self) -> Board {
        Board::new(self.grid_width, self.grid_height, self.win_length)
    }

    /// Player kind for a mark; `Empty` has no player and reads as human
    pub fn player(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.player_x,
            Mark::O => self.player_o,
            Mark::Empty => PlayerKind::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!((settings.grid_width, settings.grid_height, settings.win_length), (3, 3, 3));
        assert_eq!(settings.player(Mark::X), PlayerKind::Human);
        assert!(settings.depth.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let settings = Settings::from_toml_str(
            r#"
            grid_width = 5
            win_length = 4
            player_o = "ai"
            heuristic = "combinations"
            "#,
        )
        .unwrap();
        assert_eq!(settings.grid_width, 5);
        assert_eq!(settings.grid_height, 3);
        assert_eq!(settings.win_length, 4);
        assert_eq!(settings.player(Mark::O), PlayerKind::Ai);
        assert_eq!(settings.heuristic, Heuristic::Combinations);
    }

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(matches!(
            Settings::from_toml_str("grid_height = 0"),
            Err(Error::InvalidDimensions { width: 3, height: 0 })
        ));
        assert!(matches!(
            Settings::from_toml_str("win_length = 0"),
            Err(Error::InvalidWinLength(0))
        ));
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(matches!(Settings::from_toml_str("grid_width = \"wide\""), Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/settings.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_new_board_uses_settings() {
        let settings = Settings {
            grid_width: 4,
            grid_height: 2,
            win_length: 2,
            ..Settings::default()
        };
        let board = settings.new_board();
        assert_eq!((board.width(), board.height(), board.win_length()), (4, 2, 2));
    }
}
