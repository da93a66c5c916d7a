//! Seeded board generation.
//!
//! A board is built in two passes over the full grid:
//! - **Interior**: every position whose rounded distance to the center is
//!   below the board radius gets a random jump distance.
//! - **Boundary**: every remaining empty position touching an interior cell
//!   along an axis becomes an exit.
//!
//! The result is a roughly circular play area ringed by exits.

use jumpmaze_core::{Board, Cell, Error, Lcg, Point};

/// Jump distances scale with this fraction of the board radius.
const JUMP_SCALE: f64 = 0.9;

/// Board generator driven by a [`Lcg`].
pub struct BoardGen {
    pub rng: Lcg,
    pub board: Board,
}

impl BoardGen {
    /// Create a generator for a playable `radius` with an empty board.
    pub fn new(radius: i32, rng: Lcg) -> Result<Self, Error> {
        let side = Board::side_for(radius)?;
        Ok(Self {
            rng,
            board: Board::new(side),
        })
    }

    /// Fill interior positions with jump cells.
    ///
    /// Positions are visited row-major (`x` outer, `y` inner) and one float
    /// is drawn per interior position, in that order. Changing the order
    /// changes every board produced from a given seed.
    ///
    /// Returns the number of cells filled.
    pub fn interior(&mut self) -> usize {
        let r = self.board.radius();
        let center = self.board.center();
        let mut filled = 0;
        for x in 0..self.board.side() {
            for y in 0..self.board.side() {
                let p = Point::new(x, y);
                let d = p - center;
                let distance = f64::from(d.x * d.x + d.y * d.y).sqrt().round();
                let cell = if distance < f64::from(r) {
                    filled += 1;
                    let jump = (self.rng.next_float() * JUMP_SCALE * f64::from(r) + 1.0).floor();
                    Some(Cell(jump as u32))
                } else {
                    None
                };
                self.board.set(p, cell);
            }
        }
        filled
    }

    /// Turn empty positions bordering a jump cell into exits.
    ///
    /// A single row-major pass. Exits created earlier in the pass have value
    /// 0 and so never promote their own neighbours.
    ///
    /// Returns the number of exits placed.
    pub fn boundary(&mut self) -> usize {
        let mut placed = 0;
        for x in 0..self.board.side() {
            for y in 0..self.board.side() {
                let p = Point::new(x, y);
                if self.board.get(p).is_some() {
                    continue;
                }
                if p.neighbors_4().iter().any(|&n| self.board.holds_at_least(n, 1)) {
                    self.board.set(p, Some(Cell::EXIT));
                    placed += 1;
                }
            }
        }
        placed
    }

    /// Run both passes and hand back the board.
    pub fn build(mut self) -> Board {
        self.interior();
        self.boundary();
        self.board
    }
}

/// Generate a board for a playable `radius` (at least 1).
///
/// A positive `seed` is used as is; `None` or `Some(0)` draws a fresh one.
/// Returns the board together with the seed that produced it.
pub fn generate(radius: i32, seed: Option<u32>) -> Result<(Board, u32), Error> {
    let (rng, seed) = match seed {
        Some(s) if s > 0 => (Lcg::new(s), s),
        _ => Lcg::from_entropy(),
    };
    let board = BoardGen::new(radius, rng)?.build();
    log::debug!(
        "generated board: radius {radius}, seed {seed}, side {}, {} jump cells, {} exits",
        board.side(),
        board.jump_count(),
        board.exit_count()
    );
    Ok((board, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_out_of_range_radius() {
        assert_eq!(generate(0, Some(1)).unwrap_err(), Error::InvalidRadius(0));
        assert_eq!(
            generate(i32::MAX, Some(1)).unwrap_err(),
            Error::InvalidRadius(i32::MAX)
        );
        assert!(BoardGen::new(-1, Lcg::new(1)).is_err());
    }

    #[test]
    fn build_runs_both_passes() {
        let mut mg = BoardGen::new(3, Lcg::new(5)).unwrap();
        mg.interior();
        mg.boundary();
        let built = BoardGen::new(3, Lcg::new(5)).unwrap().build();
        assert_eq!(built, mg.board);
        assert_eq!(generate(3, Some(5)).unwrap().0, built);
    }

    #[test]
    fn seed_zero_draws_a_fresh_seed() {
        let (_, seed) = generate(2, Some(0)).unwrap();
        assert!(seed >= 1);
        let (_, seed) = generate(2, None).unwrap();
        assert!(seed >= 1);
    }

    #[test]
    fn radius_one_layout() {
        let (b, _) = generate(1, Some(42)).unwrap();
        assert_eq!(b.side(), 5);
        // 3x3 interior, 12 ring exits, 4 empty corners.
        assert_eq!(b.jump_count(), 9);
        assert_eq!(b.exit_count(), 12);
        for p in [
            Point::new(0, 0),
            Point::new(0, 4),
            Point::new(4, 0),
            Point::new(4, 4),
        ] {
            assert_eq!(b.get(p), None);
        }
        for x in 1..4 {
            for y in 1..4 {
                let c = b.get(Point::new(x, y)).unwrap();
                assert!((1..=2).contains(&c.jump()));
            }
        }
    }

    #[test]
    fn radius_two_seed_42_board() {
        let (b, _) = generate(2, Some(42)).unwrap();
        assert_eq!(
            b.to_string(),
            "\
,,0,0,0,,
,0,2,2,2,0,
0,3,2,1,2,3,0
0,2,2,1,2,2,0
0,1,3,1,2,1,0
,0,1,2,3,0,
,,0,0,0,,"
        );
    }

    #[test]
    fn interior_draws_once_per_cell_in_row_major_order() {
        let mut mg = BoardGen::new(2, Lcg::new(99)).unwrap();
        let filled = mg.interior();
        let mut rng = Lcg::new(99);
        let r = mg.board.radius();
        let mut checked = 0;
        for x in 0..mg.board.side() {
            for y in 0..mg.board.side() {
                if let Some(c) = mg.board.get(Point::new(x, y)) {
                    let expected = (rng.next_float() * 0.9 * f64::from(r) + 1.0).floor() as u32;
                    assert_eq!(c.jump(), expected);
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, filled);
        assert_eq!(mg.rng, rng);
    }

    #[test]
    fn boundary_is_single_pass() {
        // One jump cell: only its four axis neighbours become exits, never
        // the diagonals that touch those exits.
        let mut mg = BoardGen::new(1, Lcg::new(1)).unwrap();
        mg.board.set(Point::new(2, 2), Some(Cell(1)));
        assert_eq!(mg.boundary(), 4);
        assert_eq!(mg.board.get(Point::new(1, 1)), None);
        assert_eq!(mg.board.get(Point::new(1, 2)), Some(Cell::EXIT));
    }

    proptest! {
        #[test]
        fn same_seed_same_board(seed in 1u32..u32::MAX, radius in 1i32..=12) {
            let (a, sa) = generate(radius, Some(seed)).unwrap();
            let (b, sb) = generate(radius, Some(seed)).unwrap();
            prop_assert_eq!(sa, seed);
            prop_assert_eq!(sb, seed);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn exits_touch_a_jump_cell(seed in 1u32..u32::MAX, radius in 1i32..=12) {
            let (b, _) = generate(radius, Some(seed)).unwrap();
            for (p, c) in b.iter() {
                if c == Some(Cell::EXIT) {
                    prop_assert!(p.neighbors_4().iter().any(|&n| b.holds_at_least(n, 1)));
                }
            }
        }

        #[test]
        fn center_is_a_bounded_jump_cell(seed in 1u32..u32::MAX, radius in 1i32..=12) {
            let (b, _) = generate(radius, Some(seed)).unwrap();
            let c = b.cell(b.center()).unwrap();
            let r = b.radius() as f64;
            prop_assert!(c.jump() >= 1);
            prop_assert!(f64::from(c.jump()) <= (0.9 * r + 1.0).floor());
        }
    }
}
