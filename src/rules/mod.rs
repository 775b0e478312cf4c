//! Game rules for N×M tic-tac-toe
//!
//! - Win: a run of at least `win_length` marks through the last move
//! - Draw: the board fills up without a win

pub mod win;

pub use win::{has_won, run_length, winning_line};

use crate::board::{Board, Mark, Pos};

/// Game outcome, always derived from the board and the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Winning mark, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Outcome after `mark` played at `last_move`.
///
/// The win check comes first, so a move that fills the last cell and
/// completes a line is a win, not a draw.
pub fn outcome(board: &Board, last_move: Pos, mark: Mark) -> Outcome {
    if board.has_won(last_move, mark) {
        Outcome::Win(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
