//! Board representation for N×M tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

use std::fmt;
use std::ops::Neg;

/// Cell contents, also used to name the side to move.
///
/// `X` is the maximizing player (+1) and `O` the minimizing one (-1).
/// The signed mapping is only applied at scoring boundaries via [`Mark::sign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// +1 for X, -1 for O, 0 for Empty
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
            Mark::Empty => 0,
        }
    }

    /// Inverse of [`Mark::sign`]. Any positive value is X, any negative is O.
    #[inline]
    pub fn from_sign(value: i32) -> Mark {
        match value.signum() {
            1 => Mark::X,
            -1 => Mark::O,
            _ => Mark::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single character used by the text board format
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '_' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board.
///
/// Coordinates are signed so that scans can step past the edge; such
/// positions simply read as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring position one step along `dir`
    #[inline]
    pub fn step(self, dir: Direction) -> Pos {
        Pos::new(self.x + dir.dx, self.y + dir.dy)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Row-major ordering (y outer, x inner), the same order legal moves are produced in.
impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// Offset between neighbouring cells along one line axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const UP_LEFT: Direction = Direction { dx: -1, dy: -1 };
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const UP_RIGHT: Direction = Direction { dx: 1, dy: -1 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    /// One representative per line axis; the other half of each axis is `-dir`.
    pub const ALL: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP,
        Direction::UP_RIGHT,
        Direction::RIGHT,
    ];
}

impl Neg for Direction {
    type Output = Direction;

    #[inline]
    fn neg(self) -> Direction {
        Direction {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}
