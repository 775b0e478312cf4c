//! Tic-tac-toe AI engine for arbitrary N×M grids
//!
//! Two players, X and O, alternately mark empty cells. A player wins by
//! completing a horizontal, vertical or diagonal run of `win_length`
//! marks; a full board without a winner is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Grid representation, marks, positions and directions
//! - [`rules`]: Win detection around the last move and game outcome
//! - [`eval`]: Static evaluators used at the search cut-off
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: AI player with depth selection and timing
//! - [`session`]: Turn order, outcome and round tally for one game
//! - [`config`]: Settings from defaults and TOML files
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, GameSession, Outcome, PlayerKind, Settings};
//!
//! let settings = Settings {
//!     player_x: PlayerKind::Ai,
//!     player_o: PlayerKind::Ai,
//!     ..Settings::default()
//! };
//! let mut engine = AIEngine::from_settings(&settings);
//! let mut game = GameSession::new(settings).unwrap();
//!
//! while !game.is_over() {
//!     game.play_ai(&mut engine).unwrap();
//! }
//!
//! // Perfect play on 3x3 is a draw
//! assert_eq!(game.outcome(), Outcome::Draw);
//! ```
//!
//! # Scoring
//!
//! Scores are always from X's point of view: X maximizes, O minimizes.
//! A proven win is `+INF` for X and `-INF` for O.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Mark, Pos};
pub use config::{PlayerKind, Settings};
pub use engine::{recommended_depth, AIEngine, MoveResult};
pub use error::{Error, Result};
pub use eval::{Evaluator, Heuristic};
pub use rules::{has_won, outcome, Outcome};
pub use search::{best_move, Score, SearchResult, Searcher, INF};
pub use session::{GameSession, Tally};
