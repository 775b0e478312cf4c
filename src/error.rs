//! Error types for the tic-tac-toe engine
//!
//! The board and search primitives signal invalid moves with `bool`/`Option`
//! returns. These errors only come from construction, parsing, configuration
//! and the session layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board dimensions {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid win length {0} (must be at least 1)")]
    InvalidWinLength(usize),

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell '{value}' at ({x}, {y})")]
    InvalidCell { value: String, x: usize, y: usize },

    #[error("board text is {width}x{height}, but {expected_width}x{expected_height} was requested")]
    BoardSizeMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("illegal move at {0}: cell is occupied or off the board")]
    IllegalMove(Pos),

    #[error("game already over")]
    GameOver,

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
