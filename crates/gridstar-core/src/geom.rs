//! Geometry primitives: [`Coordinate`] and [`Direction`].
//!
//! The coordinate system has its origin at (0, 0) with X growing right and
//! Y growing **up**, so [`Coordinate::up`] increments `y`.

use std::fmt;

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A 2D integer grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell at (x - 1, y).
    #[inline]
    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// The cell at (x + 1, y).
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// The cell at (x, y + 1).
    #[inline]
    pub const fn up(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// The cell at (x, y - 1).
    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// The adjacent cell in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::Left => self.left(),
            Direction::Up => self.up(),
            Direction::Right => self.right(),
            Direction::Down => self.down(),
        }
    }

    /// The four cardinal neighbours in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Coordinate; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Whether both components are non-negative.
    #[inline]
    pub const fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

// --- trait impls for Coordinate ---

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    /// Lexicographic: `x` first, then `y`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions, in neighbour expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];
}
