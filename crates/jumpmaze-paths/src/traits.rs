use jumpmaze_core::Point;

/// Edge source for the reachability search.
///
/// For a jump maze the edges out of a cell are its legal jumps, so the
/// neighbours of `p` are the cells a single jump from `p` lands on.
pub trait Pather {
    /// Push the landings reachable from `p` onto `buf`, which the caller
    /// has already cleared. Positions with no jumps push nothing.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
