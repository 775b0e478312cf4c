//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over cloned boards
//! - Search statistics for comparing pruned and plain search

pub mod alphabeta;

pub use alphabeta::{best_move, Score, SearchResult, SearchStats, Searcher, INF};
