//! The square board of jump cells.
//!
//! [`Cell`] is a newtype over `u32` holding a jump distance; `0` marks an
//! exit. [`Board`] stores `Option<Cell>` per position, with `None` meaning
//! the position is not part of the play surface.

use std::fmt;

use crate::error::Error;
use crate::geom::Point;

/// A jump distance. Zero marks an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub u32);

impl Cell {
    /// The exit cell.
    pub const EXIT: Self = Self(0);

    /// Create a new cell with the given jump distance.
    pub const fn new(jump: u32) -> Self {
        Self(jump)
    }

    /// The jump distance.
    pub const fn jump(self) -> u32 {
        self.0
    }

    /// Whether this is an exit (goal) cell.
    pub const fn is_exit(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Cell {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Cell> for u32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A square grid of optional cells.
///
/// Positions are `(x, y)` with `x` the row. The linear index of a position
/// is `x * side + y`. The side never exceeds [`Board::MAX_SIDE`], so every
/// index and every in-board step fits an `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoardRepr"))]
pub struct Board {
    side: i32,
    cells: Vec<Option<Cell>>,
}

/// Unchecked serialized form of a [`Board`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardRepr {
    side: i32,
    cells: Vec<Option<Cell>>,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRepr> for Board {
    type Error = Error;

    fn try_from(r: BoardRepr) -> Result<Self, Error> {
        Board::from_cells(r.side, r.cells)
    }
}

impl Board {
    /// Largest supported side.
    pub const MAX_SIDE: i32 = (1 << 15) - 1;
    /// Largest playable radius, the one whose board has [`Board::MAX_SIDE`].
    pub const MAX_RADIUS: i32 = (Self::MAX_SIDE - 3) / 2;

    /// Create a board of the given side with every position empty.
    ///
    /// The side is clamped to `0..=MAX_SIDE`.
    pub fn new(side: i32) -> Self {
        let side = side.clamp(0, Self::MAX_SIDE);
        let n = side as usize;
        Self {
            side,
            cells: vec![None; n * n],
        }
    }

    /// Build a board from its cells in linear-index order.
    ///
    /// Fails unless `side` is in `0..=MAX_SIDE` and there are exactly
    /// `side * side` cells.
    pub fn from_cells(side: i32, cells: Vec<Option<Cell>>) -> Result<Self, Error> {
        let fits = (0..=Self::MAX_SIDE).contains(&side)
            && cells.len() == side as usize * side as usize;
        if !fits {
            return Err(Error::BadLayout {
                side,
                len: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Board side for a playable radius: `2 * (radius + 1) + 1`.
    pub fn side_for(radius: i32) -> Result<i32, Error> {
        if !(1..=Self::MAX_RADIUS).contains(&radius) {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(2 * (radius + 1) + 1)
    }

    /// Side length.
    pub fn side(&self) -> i32 {
        self.side
    }

    /// The board radius: distance from the center to an edge.
    pub fn radius(&self) -> i32 {
        (self.side - 1) / 2
    }

    /// The start position, the board center.
    pub fn center(&self) -> Point {
        let r = self.radius();
        Point::new(r, r)
    }

    /// Total number of positions (`side * side`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.side && p.y >= 0 && p.y < self.side
    }

    /// Linear index of `p`, or `None` if off the board.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.side as usize + p.y as usize)
    }

    /// Position of a linear index, or `None` if past the end.
    #[inline]
    pub fn point(&self, idx: usize) -> Option<Point> {
        if idx >= self.cells.len() {
            return None;
        }
        let side = self.side as usize;
        Some(Point::new((idx / side) as i32, (idx % side) as i32))
    }

    /// The cell at `p`.
    ///
    /// Returns `Ok(None)` for an empty position and an error if `p` is off
    /// the board.
    pub fn at(&self, p: Point) -> Result<Option<Cell>, Error> {
        match self.idx(p) {
            Some(i) => Ok(self.cells[i]),
            None => Err(self.out_of_bounds(p)),
        }
    }

    /// The cell at `p`, treating off-board positions as empty.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.idx(p).and_then(|i| self.cells[i])
    }

    /// The in-play cell at `p`, or an error if `p` is off the board or empty.
    pub fn cell(&self, p: Point) -> Result<Cell, Error> {
        self.at(p)?.ok_or(Error::NotInPlay(p))
    }

    /// Whether `p` holds a cell with jump distance at least `min`.
    ///
    /// With `min == 0` this accepts exits; with `min == 1` it accepts only
    /// cells a jump may pass over.
    #[inline]
    pub fn holds_at_least(&self, p: Point, min: u32) -> bool {
        self.get(p).is_some_and(|c| c.jump() >= min)
    }

    /// Set the cell at `p`. Does nothing if off the board.
    pub fn set(&mut self, p: Point, cell: Option<Cell>) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = cell;
        }
    }

    /// Iterate over positions in row-major order (`x` outer, `y` inner).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let side = self.side;
        (0..side).flat_map(move |x| (0..side).map(move |y| Point::new(x, y)))
    }

    /// Iterate over `(Point, Option<Cell>)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<Cell>)> + '_ {
        self.cells.iter().enumerate().map(|(i, c)| {
            let side = self.side as usize;
            (Point::new((i / side) as i32, (i % side) as i32), *c)
        })
    }

    /// Count positions whose content satisfies `f`.
    pub fn count_fn(&self, mut f: impl FnMut(Option<Cell>) -> bool) -> usize {
        self.cells.iter().filter(|c| f(**c)).count()
    }

    /// Number of exit cells.
    pub fn exit_count(&self) -> usize {
        self.count_fn(|c| c.is_some_and(Cell::is_exit))
    }

    /// Number of jump cells (in play, non-exit).
    pub fn jump_count(&self) -> usize {
        self.count_fn(|c| c.is_some_and(|c| !c.is_exit()))
    }

    fn out_of_bounds(&self, p: Point) -> Error {
        Error::OutOfBounds {
            pos: p,
            side: self.side,
        }
    }
}

/// Comma-separated rows, one per line. Empty positions are empty tokens.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.side {
            if x > 0 {
                writeln!(f)?;
            }
            for y in 0..self.side {
                if y > 0 {
                    f.write_str(",")?;
                }
                if let Some(c) = self.get(Point::new(x, y)) {
                    write!(f, "{}", c.jump())?;
                }
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let mut b = Board::new(5);
        b.set(Point::new(2, 2), Some(Cell(2)));
        b.set(Point::new(2, 3), Some(Cell::EXIT));
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn mismatched_cells_are_rejected() {
        assert!(serde_json::from_str::<Board>(r#"{"side":5,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"side":-1,"cells":[]}"#).is_err());
        let ok: Board = serde_json::from_str(r#"{"side":1,"cells":[2]}"#).unwrap();
        assert_eq!(ok.get(Point::new(0, 0)), Some(Cell(2)));
    }
}
