//! Geometry primitives: [`Point`] and [`Dir`].
//!
//! Coordinates follow the board's row/column convention: `x` selects the row
//! and `y` the column, both zero-based.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer board position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The point reached by stepping `steps` times in direction `dir`.
    #[inline]
    pub fn step(self, dir: Dir, steps: i32) -> Self {
        self + dir.delta() * steps
    }

    /// The four axis neighbours, in [`Dir::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Dir::ALL.map(|d| self + d.delta())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four axis-aligned jump directions.
///
/// The discriminant is the direction's stable index, which replay logic
/// hands around to pin a move to a single axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    /// `(+1, 0)`
    XPlus = 0,
    /// `(-1, 0)`
    XMinus = 1,
    /// `(0, +1)`
    YPlus = 2,
    /// `(0, -1)`
    YMinus = 3,
}

impl Dir {
    /// All directions in index order.
    pub const ALL: [Dir; 4] = [Dir::XPlus, Dir::XMinus, Dir::YPlus, Dir::YMinus];

    /// Unit vector of this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Dir::XPlus => Point::new(1, 0),
            Dir::XMinus => Point::new(-1, 0),
            Dir::YPlus => Point::new(0, 1),
            Dir::YMinus => Point::new(0, -1),
        }
    }

    /// Stable index in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction with the given index, if any.
    pub fn from_index(i: usize) -> Option<Dir> {
        Dir::ALL.get(i).copied()
    }

    /// Direction of an axis-aligned displacement.
    ///
    /// Only the sign of each component matters, so a jump of any length maps
    /// to its unit direction. Returns `None` for the zero vector and for
    /// diagonal displacements.
    pub fn from_delta(delta: Point) -> Option<Dir> {
        let unit = Point::new(delta.x.signum(), delta.y.signum());
        Dir::ALL.into_iter().find(|d| d.delta() == unit)
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dir::XPlus => "+x",
            Dir::XMinus => "-x",
            Dir::YPlus => "+y",
            Dir::YMinus => "-y",
        };
        f.write_str(s)
    }
}
