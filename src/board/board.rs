//! Board structure with win-length configuration

use std::fmt;
use std::str::FromStr;

use super::{Mark, Pos};
use crate::error::{Error, Result};

/// Game board.
///
/// Cells are stored row-major. The board is a plain value: cloning it gives
/// an independent copy, which the search relies on to explore sibling
/// branches without undo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    win_length: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty `width × height` board.
    ///
    /// Degenerate sizes are accepted here; callers that read sizes from the
    /// outside go through [`crate::Settings::validate`] first.
    pub fn new(width: usize, height: usize, win_length: usize) -> Self {
        Self {
            width,
            height,
            win_length,
            cells: vec![Mark::Empty; width * height],
        }
    }

    /// Build a board from signed rows (`1` = X, `-1` = O, `0` = empty).
    ///
    /// `rows[y][x]`, so the outer slice runs top to bottom.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R], win_length: usize) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut board = Board::new(width, height, win_length);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: y,
                    expected: width,
                    got: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if !(-1..=1).contains(&value) {
                    return Err(Error::InvalidCell {
                        value: value.to_string(),
                        x,
                        y,
                    });
                }
                board.cells[y * width + x] = Mark::from_sign(value);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Check if position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Mark at position; anything off the board reads as `Empty`.
    #[inline]
    pub fn value_at(&self, pos: Pos) -> Mark {
        self.index(pos).map_or(Mark::Empty, |i| self.cells[i])
    }

    /// Place `mark` at `pos` if it is on the board and empty.
    ///
    /// Returns `false` and leaves the board untouched otherwise.
    pub fn apply_move(&mut self, pos: Pos, mark: Mark) -> bool {
        if mark.is_empty() {
            return false;
        }
        match self.index(pos) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i] = mark;
                true
            }
            _ => false,
        }
    }

    /// All empty cells, row-major (y outer, x inner).
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.cells()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Copy of this board with one more mark placed.
    ///
    /// `pos` is expected to come from [`Board::legal_moves`]; an illegal
    /// position yields an unchanged copy.
    #[must_use]
    pub fn clone_with_move(&self, pos: Pos, mark: Mark) -> Board {
        let mut next = self.clone();
        next.apply_move(pos, mark);
        next
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Check if no mark has been placed yet
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    /// Iterate over every cell with its position, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &m)| (Pos::new((i % width) as i32, (i / width) as i32), m))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses rows of `X`, `O` and `.` separated by newlines or `/`.
///
/// The win length defaults to the shorter side, capped at 3; use
/// [`Board::with_win_length`] to change it.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();

        let mut signed = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (x, c) in row.chars().enumerate() {
                let mark = Mark::from_symbol(c).ok_or_else(|| Error::InvalidCell {
                    value: c.to_string(),
                    x,
                    y,
                })?;
                cells.push(mark.sign());
            }
            signed.push(cells);
        }

        let height = signed.len();
        let width = signed.first().map_or(0, Vec::len);
        Board::from_rows(&signed, width.min(height).min(3))
    }
}

impl Board {
    /// Same cells, different win length
    #[must_use]
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }
}
