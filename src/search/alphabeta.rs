//! Minimax search with alpha-beta pruning
//!
//! X (+1) maximizes and O (-1) minimizes. Every node works on its own board
//! copy produced by [`Board::clone_with_move`], so sibling branches never see
//! each other's moves and the caller's board is never touched.
//!
//! Leaf values:
//! - A move that completes a line scores `sign * INF` for the mover
//! - A move that fills the board without winning scores 0
//! - At depth 0 the static evaluator scores the resulting board
//!
//! Scores are `f64` so that the infinite win/loss bounds compare correctly
//! against finite heuristic scores.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::Searcher;
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let result = Searcher::new().search(&board, Mark::X, 2);
//! assert_eq!(result.best_move, Some(Pos::new(2, 0)));
//! ```

use tracing::trace;

use crate::board::{Board, Mark, Pos};
use crate::eval::Evaluator;

/// Search score. Positive favours X.
pub type Score = f64;

/// Unbounded win/loss score
pub const INF: Score = f64::INFINITY;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Child positions generated
    pub nodes: u64,
    /// Move loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// Children scored by the static evaluator
    pub leaf_evals: u64,
    /// Children that ended the game (win or full board)
    pub terminals: u64,
}

/// Root search result
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when there was nothing to play
    pub best_move: Option<Pos>,
    /// Backed-up value of the root position
    pub score: Score,
    /// Depth the search was run with
    pub depth: u32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher.
///
/// Holds no state between searches apart from its configuration; statistics
/// are reset at the start of every root call.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Alpha-beta searcher with the line-squares evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::default())
    }

    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Plain minimax: same results, every branch visited
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    #[inline]
    pub fn is_pruning(&self) -> bool {
        self.pruning
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best move for `player` with `depth` plies of lookahead below
    /// the root moves.
    ///
    /// Returns `best_move: None` if the board has no empty cell, with the
    /// initial bound `-sign * INF` as score. An `Empty` player searches
    /// nothing and scores `0.0`.
    pub fn search(&mut self, board: &Board, player: Mark, depth: u32) -> SearchResult {
        self.stats = SearchStats::default();
        self.fit_evaluator(board);

        let (best_move, score) = self.search_node(board, player, depth, -INF, INF);

        trace!(
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            leaf_evals = self.stats.leaf_evals,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats.clone(),
        }
    }

    /// Backed-up value of `board` with `player` to move, inside the window
    /// `(alpha, beta)`. This is what a non-root node reports to its parent.
    pub fn search_value(
        &mut self,
        board: &Board,
        player: Mark,
        depth: u32,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.fit_evaluator(board);
        self.search_node(board, player, depth, alpha, beta).1
    }

    /// Rebuild a geometry-bound evaluator if the board shape changed
    fn fit_evaluator(&mut self, board: &Board) {
        self.evaluator.bind(board);
    }

    fn search_node(
        &mut self,
        board: &Board,
        player: Mark,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<Pos>, Score) {
        if player.is_empty() {
            return (None, 0.0);
        }

        let sign = Score::from(player.sign());
        let maximizing = player == Mark::X;

        // Opposite of the player's goal
        let mut best_value = -sign * INF;
        let mut best_move = None;

        for pos in board.legal_moves() {
            let child = board.clone_with_move(pos, player);
            self.stats.nodes += 1;

            let value = if child.has_won(pos, player) {
                self.stats.terminals += 1;
                sign * INF
            } else if child.is_full() {
                self.stats.terminals += 1;
                0.0
            } else if depth == 0 {
                self.stats.leaf_evals += 1;
                self.evaluator.score(&child) as Score
            } else {
                self.search_node(&child, player.opponent(), depth - 1, alpha, beta).1
            };

            let is_better = if maximizing {
                value > best_value
            } else {
                value < best_value
            };

            // A forced loss still has to name a move, so the first candidate
            // is always taken. Its value cannot beat the sentinel.
            if is_better || best_move.is_none() {
                best_value = if is_better { value } else { best_value };
                best_move = Some(pos);
                if self.pruning && is_better {
                    if maximizing {
                        alpha = alpha.max(value);
                    } else {
                        beta = beta.min(value);
                    }
                }
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_move, best_value)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Best move for `player`, or `None` if there is none to make.
///
/// Convenience wrapper around [`Searcher::search`] with default settings.
#[must_use]
pub fn best_move(board: &Board, player: Mark, depth: u32) -> Option<Pos> {
    Searcher::new().search(board, player, depth).best_move
}
