//! Positional weights from winning-window counts
//!
//! A cell's weight is how many winning windows (rows, columns and both
//! diagonals of `win_length` cells) can still pass through it on an empty
//! board of the given size. Centre cells of a 3×3 board weigh 4, corners 3,
//! edges 2. The weights depend only on geometry, so the map is built once
//! per board shape and reused for every leaf.

use crate::board::Board;

/// Precomputed per-cell weights for one board geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationMap {
    width: usize,
    height: usize,
    win_length: usize,
    weights: Vec<i64>,
}

impl CombinationMap {
    pub fn new(width: usize, height: usize, win_length: usize) -> Self {
        let (w, h, n) = (width as i64, height as i64, win_length as i64);
        let max_diagonal = w.min(h);
        let max_length = w.max(h);

        // Diagonal windows through (x, y) going one way; the other diagonal
        // is the same count read from the horizontally mirrored cell.
        let diagonal = |x: i64, y: i64| -> i64 {
            let edge = (x + 1).min(w - x).min((y + 1).min(h - y));
            let reach = x + y + 1;
            let span = if reach < max_length {
                reach
            } else {
                max_length - (reach - max_diagonal)
            };
            let possible = (span - (n - 1)).max(0);
            possible.min(edge).min(max_diagonal).min(n).max(0)
        };

        let row_windows = (w - n + 1).max(0);
        let col_windows = (h - n + 1).max(0);

        let mut weights = Vec::with_capacity(width * height);
        for y in 0..h {
            for x in 0..w {
                let diagonals = diagonal(x, y) + diagonal(w - 1 - x, y);
                let row = (x + 1).min(w - x).min(row_windows).min(n);
                let col = (y + 1).min(h - y).min(col_windows).min(n);
                weights.push(diagonals + row + col);
            }
        }

        Self {
            width,
            height,
            win_length,
            weights,
        }
    }

    /// Map matching `board`'s size and win length
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.width(), board.height(), board.win_length())
    }

    /// True if this map was built for `board`'s geometry
    pub fn fits(&self, board: &Board) -> bool {
        self.width == board.width()
            && self.height == board.height()
            && self.win_length == board.win_length()
    }

    /// Weight of cell `(x, y)`, or `None` off the map
    pub fn weight(&self, x: usize, y: usize) -> Option<i64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.weights.get(y * self.width + x).copied()
    }

    /// Sum of `sign(mark) * weight` over all occupied cells.
    ///
    /// Positive favours X. A board of another geometry is scored with a map
    /// built for it.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> i64 {
        if !self.fits(board) {
            return Self::for_board(board).evaluate(board);
        }
        board
            .cells()
            .zip(&self.weights)
            .map(|((_, mark), &weight)| i64::from(mark.sign()) * weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_board_weights() {
        let map = CombinationMap::new(3, 3, 3);
        assert_eq!(map.weight(0, 0), Some(3));
        assert_eq!(map.weight(1, 0), Some(2));
        assert_eq!(map.weight(1, 1), Some(4));
        assert_eq!(map.weight(2, 2), Some(3));
        assert_eq!(map.weight(0, 1), Some(2));
    }

    #[test]
    fn test_weights_are_symmetric() {
        let map = CombinationMap::new(5, 4, 3);
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(map.weight(x, y), map.weight(4 - x, y), "mirror x at ({x}, {y})");
                assert_eq!(map.weight(x, y), map.weight(x, 3 - y), "mirror y at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_win_length_longer_than_board() {
        let map = CombinationMap::new(2, 2, 3);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(map.weight(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_evaluate_signs() {
        let map = CombinationMap::new(3, 3, 3);
        let board = Board::from_rows(&[[1, 0, 0], [0, -1, 0], [0, 0, 0]], 3).unwrap();
        assert_eq!(map.evaluate(&board), 3 - 4);
        assert!(map.fits(&board));
        assert!(!map.fits(&Board::new(4, 3, 3)));
    }

    #[test]
    fn test_weight_off_the_map() {
        let map = CombinationMap::new(3, 2, 2);
        assert!(map.weight(2, 1).is_some());
        assert_eq!(map.weight(3, 0), None);
        assert_eq!(map.weight(0, 2), None);
        assert_eq!(CombinationMap::new(0, 0, 0).weight(0, 0), None);
    }

    #[test]
    fn test_evaluate_other_geometry() {
        let empty_map = CombinationMap::new(0, 0, 0);
        let board = Board::from_rows(&[[1, 0, 0], [0, -1, 0], [0, 0, 0]], 3).unwrap();
        assert_eq!(empty_map.evaluate(&board), 3 - 4);
    }
}
