//! Error type shared by the jump maze crates.

use crate::board::Board;
use crate::geom::Point;

/// Failures of board construction and board queries.
///
/// Configuration errors are reported before any work happens. The remaining
/// variants are precondition violations on the caller's side: asking about a
/// cell that is off the board or not in play, or routing to a cell the
/// search never reached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The playable radius is outside `1..=Board::MAX_RADIUS`.
    #[error("invalid radius {0}: must be between 1 and {max}", max = Board::MAX_RADIUS)]
    InvalidRadius(i32),
    /// `choice` was handed an empty slice.
    #[error("cannot choose from an empty set")]
    EmptyChoice,
    /// The position lies outside the board.
    #[error("position {pos} is outside the {side}x{side} board")]
    OutOfBounds { pos: Point, side: i32 },
    /// The position is on the board but holds no cell.
    #[error("position {0} is not an in-play cell")]
    NotInPlay(Point),
    /// No discovery node exists for the position.
    #[error("position {0} is not reachable from the start")]
    Unreachable(Point),
    /// Stored cells do not fill a `side` x `side` grid.
    #[error("a {side}x{side} board cannot hold {len} cells")]
    BadLayout { side: i32, len: usize },
    /// A stored linear index points past the end of its grid.
    #[error("index {index} is outside a grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
}
