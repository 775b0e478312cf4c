//! Line-square heuristic for cut-off search nodes
//!
//! Every occupied cell contributes, per axis, the square of the run of its
//! own mark through it, signed by the mark. Longer lines are worth
//! disproportionately more, so positive totals favour X and negative totals
//! favour O. The score is only meant to steer a depth-limited search; it is
//! not an exact game value.

use crate::board::{Board, Direction};
use crate::rules::run_length;

/// Evaluate the board from X's point of view.
///
/// There is no perspective argument: the same board always yields the same
/// number, and swapping every X for an O negates it.
#[must_use]
pub fn evaluate(board: &Board) -> i64 {
    let mut score = 0i64;

    for (pos, mark) in board.cells() {
        if mark.is_empty() {
            continue;
        }
        let sign = i64::from(mark.sign());
        for dir in Direction::ALL {
            let len = run_length(board, pos, mark, dir, None) as i64;
            score += len * len * sign;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate(&Board::new(4, 4, 3)), 0);
    }

    #[test]
    fn test_single_mark() {
        // Four axes, each a run of one
        let board = Board::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]], 3).unwrap();
        assert_eq!(evaluate(&board), 4);
        let board = Board::from_rows(&[[0, 0, 0], [0, -1, 0], [0, 0, 0]], 3).unwrap();
        assert_eq!(evaluate(&board), -4);
    }

    #[test]
    fn test_pair_scores_squared() {
        // Each X: horizontal run 2 (4) + three singles (3) = 7
        let board = Board::from_rows(&[[1, 1, 0], [0, 0, 0], [0, 0, 0]], 3).unwrap();
        assert_eq!(evaluate(&board), 14);
    }

    #[test]
    fn test_diagonal_line() {
        // Three X on the main diagonal: each has 9 + 3
        let board = Board::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]], 3).unwrap();
        assert_eq!(evaluate(&board), 36);
    }

    #[test]
    fn test_mirrored_marks_negate() {
        let board = Board::from_rows(&[[1, 1, -1], [0, -1, 0], [1, 0, 0]], 3).unwrap();
        let swapped = Board::from_rows(&[[-1, -1, 1], [0, 1, 0], [-1, 0, 0]], 3).unwrap();
        assert_eq!(evaluate(&board), -evaluate(&swapped));
    }

    #[test]
    fn test_connected_beats_scattered() {
        let connected = Board::from_rows(&[[1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 3).unwrap();
        let scattered = Board::from_rows(&[[1, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0]], 3).unwrap();
        assert!(evaluate(&connected) > evaluate(&scattered));
    }
}
