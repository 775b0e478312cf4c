//! AI player facade over the minimax searcher
//!
//! The engine decides how deep to search and wraps the search result with
//! timing. Search cost grows quickly with the number of empty cells, so
//! without an explicit depth the engine picks one from the grid size that
//! keeps a single move within interactive wall-clock time.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new(3, 3, 3);
//! board.apply_move(Pos::new(1, 1), Mark::X);
//!
//! if let Some(pos) = engine.get_move(&board, Mark::O) {
//!     board.apply_move(pos, Mark::O);
//! }
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Mark, Pos};
use crate::config::Settings;
use crate::eval::{Evaluator, Heuristic};
use crate::search::{Score, SearchStats, Searcher};

/// Depth that keeps a full move search interactive for a `width × height`
/// grid. Small boards are searched to the end.
pub fn recommended_depth(width: usize, height: usize) -> u32 {
    let cells = width * height;
    match cells {
        0..=12 => cells as u32,
        13..=16 => 8,
        17..=20 => 6,
        21..=30 => 5,
        31..=56 => 4,
        57..=81 => 3,
        82..=225 => 2,
        226..=400 => 1,
        _ => 0,
    }
}

/// Result of a move search with timing
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up value of the position, positive favours X
    pub score: Score,
    /// Depth the search ran with
    pub depth: u32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub stats: SearchStats,
}

impl MoveResult {
    /// True if the search proved a forced win for the mover
    pub fn is_forced_win(&self, mover: Mark) -> bool {
        self.score.is_infinite() && self.score.signum() == f64::from(mover.sign())
    }
}

/// AI engine
pub struct AIEngine {
    searcher: Searcher,
    /// Fixed depth, or `None` to use [`recommended_depth`]
    depth: Option<u32>,
}

impl AIEngine {
    /// Engine with grid-size depth selection and the line-squares evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(None, Heuristic::LineSquares)
    }

    #[must_use]
    pub fn with_config(depth: Option<u32>, heuristic: Heuristic) -> Self {
        Self {
            searcher: Searcher::with_evaluator(Evaluator::new(heuristic)),
            depth,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_config(settings.depth, settings.heuristic)
    }

    /// Depth used for `board`
    pub fn depth_for(&self, board: &Board) -> u32 {
        self.depth
            .unwrap_or_else(|| recommended_depth(board.width(), board.height()))
    }

    pub fn set_depth(&mut self, depth: Option<u32>) {
        self.depth = depth;
    }

    /// Best move for `mark`, or `None` if the board has no empty cell
    #[must_use]
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> Option<Pos> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Best move with score, depth, timing and node counts
    #[instrument(skip(self, board), fields(width = board.width(), height = board.height()))]
    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        let start = Instant::now();
        let depth = self.depth_for(board);

        let result = self.searcher.search(board, mark, depth);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            depth,
            nodes = result.stats.nodes,
            time_ms,
            "AI chose move"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth,
            time_ms,
            stats: result.stats,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
