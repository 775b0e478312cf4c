//! Evaluation module for cut-off search nodes
//!
//! Two static evaluators are available:
//! - Line squares: squared run lengths through every occupied cell (default)
//! - Combinations: fixed per-cell weights from winning-window counts
//!
//! Both score from X's point of view (positive favours X).

pub mod combinations;
pub mod heuristic;

pub use combinations::CombinationMap;
pub use heuristic::evaluate;

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Which static evaluator to use at the depth cut-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    #[default]
    LineSquares,
    Combinations,
}

/// Static evaluator, possibly bound to one board geometry
#[derive(Debug, Clone)]
pub enum Evaluator {
    LineSquares,
    /// Weight map for the last board shape seen, `None` until first bound
    Combinations(Option<CombinationMap>),
}

impl Evaluator {
    /// Evaluator not yet bound to a board shape.
    ///
    /// A combinations map is built by [`Evaluator::bind`], or on the fly by
    /// [`Evaluator::score`] while unbound.
    pub fn new(heuristic: Heuristic) -> Self {
        match heuristic {
            Heuristic::LineSquares => Evaluator::LineSquares,
            Heuristic::Combinations => Evaluator::Combinations(None),
        }
    }

    /// Build the evaluator for `board`'s geometry
    pub fn for_board(heuristic: Heuristic, board: &Board) -> Self {
        let mut evaluator = Self::new(heuristic);
        evaluator.bind(board);
        evaluator
    }

    /// Rebuild the weight map if it is missing or `board` has another shape
    pub fn bind(&mut self, board: &Board) {
        if let Evaluator::Combinations(slot) = self {
            if !slot.as_ref().is_some_and(|map| map.fits(board)) {
                *slot = Some(CombinationMap::for_board(board));
            }
        }
    }

    /// True if scoring `board` needs no new weight map
    pub fn is_bound_to(&self, board: &Board) -> bool {
        match self {
            Evaluator::LineSquares => true,
            Evaluator::Combinations(slot) => slot.as_ref().is_some_and(|map| map.fits(board)),
        }
    }

    #[inline]
    pub fn score(&self, board: &Board) -> i64 {
        match self {
            Evaluator::LineSquares => evaluate(board),
            Evaluator::Combinations(Some(map)) => map.evaluate(board),
            Evaluator::Combinations(None) => CombinationMap::for_board(board).evaluate(board),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::LineSquares
    }
}
