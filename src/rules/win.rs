//! Win condition checking for N-in-a-row on an arbitrary grid
//!
//! A move can only complete lines that pass through it, so every check here
//! is local to the last move: four axes, each walked in both directions.

use crate::board::{Board, Direction, Mark, Pos};

/// Length of the run of `mark` through `pos` along the axis of `dir`.
///
/// Walks forward along `dir` until a mismatch, then restarts at `pos` and
/// continues along `-dir`; the count carries over between the two halves.
/// `pos` itself always counts as one. With `limit = Some(n)` the walk stops
/// as soon as the count reaches `n`.
pub fn run_length(board: &Board, pos: Pos, mark: Mark, dir: Direction, limit: Option<usize>) -> usize {
    let limit = limit.unwrap_or(usize::MAX);
    let mut count = 1;
    if count >= limit {
        return count;
    }

    for step in [dir, -dir] {
        let mut check = pos.step(step);
        while board.value_at(check) == mark {
            count += 1;
            if count >= limit {
                return count;
            }
            check = check.step(step);
        }
    }
    count
}

/// Check whether the move at `last_move` gave `mark` a run of `win_length`.
#[inline]
pub fn has_won(board: &Board, last_move: Pos, mark: Mark, win_length: usize) -> bool {
    if mark.is_empty() {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|&dir| run_length(board, last_move, mark, dir, Some(win_length)) >= win_length)
}

/// Cells of the full run through `last_move` that reaches the board's win
/// length, ordered from one end of the line to the other.
///
/// Returns `None` if the move did not win.
pub fn winning_line(board: &Board, last_move: Pos, mark: Mark) -> Option<Vec<Pos>> {
    if mark.is_empty() {
        return None;
    }

    for dir in Direction::ALL {
        // Walk back to the far end of the run, then collect forward
        let mut start = last_move;
        while board.value_at(start.step(-dir)) == mark {
            start = start.step(-dir);
        }

        let mut line = Vec::new();
        let mut pos = start;
        while board.value_at(pos) == mark {
            line.push(pos);
            pos = pos.step(dir);
        }

        if line.len() >= board.win_length() {
            return Some(line);
        }
    }
    None
}

impl Board {
    /// [`has_won`] using this board's own win length
    #[inline]
    pub fn has_won(&self, last_move: Pos, mark: Mark) -> bool {
        has_won(self, last_move, mark, self.win_length())
    }
}
