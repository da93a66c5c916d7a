use jumpmaze_core::{Board, Dir, Error, Point};

use crate::traits::Pather;

/// The rule set deciding which jumps are legal.
///
/// A jump from a cell of value `v` travels exactly `v` steps along one axis.
/// By default every cell passed over must be a jump cell (value >= 1) and
/// the landing cell may be anything in play, exits included. With
/// `skip_intermediate` only the landing cell is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpRules {
    pub skip_intermediate: bool,
}

impl JumpRules {
    /// Rules that check every cell along the jump.
    pub const STRICT: Self = Self {
        skip_intermediate: false,
    };

    /// Rules that only check the landing cell.
    pub const SKIPPING: Self = Self {
        skip_intermediate: true,
    };

    /// Whether a jump of length `jump` from `from` along `dir` is legal.
    ///
    /// `jump` must be positive; exits never jump. A jump of at least the
    /// board's side can never land on the board.
    pub fn allows(&self, board: &Board, from: Point, jump: u32, dir: Dir) -> bool {
        let Ok(jump) = i32::try_from(jump) else {
            return false;
        };
        if jump < 1 || jump >= board.side() {
            return false;
        }
        let first = if self.skip_intermediate { jump } else { 1 };
        (first..=jump).all(|i| {
            let min = if i < jump { 1 } else { 0 };
            board.holds_at_least(from.step(dir, i), min)
        })
    }

    /// Append the legal landing positions from `p` into `buf`.
    ///
    /// With `forced` set only that direction is checked. Landings come out in
    /// [`Dir::ALL`] order. Fails if `p` is off the board or not in play.
    pub fn push_moves(
        &self,
        board: &Board,
        p: Point,
        forced: Option<Dir>,
        buf: &mut Vec<Point>,
    ) -> Result<(), Error> {
        let cell = board.cell(p)?;
        if cell.is_exit() {
            return Ok(());
        }
        let jump = cell.jump();
        let dirs: &[Dir] = match forced {
            Some(ref d) => std::slice::from_ref(d),
            None => &Dir::ALL,
        };
        for &d in dirs {
            if self.allows(board, p, jump, d) {
                // allows() bounds the jump below the side.
                buf.push(p.step(d, jump as i32));
            }
        }
        Ok(())
    }

    /// The legal landing positions from `p`.
    pub fn legal_moves(
        &self,
        board: &Board,
        p: Point,
        forced: Option<Dir>,
    ) -> Result<Vec<Point>, Error> {
        let mut buf = Vec::with_capacity(4);
        self.push_moves(board, p, forced, &mut buf)?;
        Ok(buf)
    }
}

/// The legal landing positions from `p` under `rules`.
pub fn legal_moves(
    board: &Board,
    p: Point,
    forced: Option<Dir>,
    rules: JumpRules,
) -> Result<Vec<Point>, Error> {
    rules.legal_moves(board, p, forced)
}

/// A [`Pather`] over a board whose edges are legal jumps.
#[derive(Debug, Clone, Copy)]
pub struct Jumper<'a> {
    pub board: &'a Board,
    pub rules: JumpRules,
}

impl<'a> Jumper<'a> {
    pub fn new(board: &'a Board, rules: JumpRules) -> Self {
        Self { board, rules }
    }
}

impl Pather for Jumper<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if let Err(e) = self.rules.push_moves(self.board, p, None, buf) {
            log::warn!("no jumps from {p}: {e}");
        }
    }
}
