use jumpmaze_core::{Dir, Error, Point};

use crate::discovery::DiscoveryMap;

/// One stop on a replayed route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub pos: Point,
    /// Direction of the jump leaving `pos`; `None` at the last stop.
    pub next: Option<Dir>,
}

impl DiscoveryMap {
    /// The shortest route from the start to `target`, both ends included.
    ///
    /// Follows parent links back to the start and reverses them, so the
    /// route has `depth + 1` positions. Fails if `target` is off the board
    /// or was never reached.
    pub fn path_to(&self, target: Point) -> Result<Vec<Point>, Error> {
        if self.idx(target).is_none() {
            return Err(Error::OutOfBounds {
                pos: target,
                side: self.side,
            });
        }
        let mut node = self.get(target).ok_or(Error::Unreachable(target))?;
        let mut path = Vec::with_capacity(node.depth as usize + 1);
        path.push(node.pos);
        while let Some(parent) = node.parent {
            // A well-formed parent chain never revisits a cell.
            if path.len() > self.nodes.len() {
                return Err(Error::Unreachable(target));
            }
            node = self.get(parent).ok_or(Error::Unreachable(parent))?;
            path.push(node.pos);
        }
        path.reverse();
        Ok(path)
    }

    /// [`path_to`](Self::path_to) annotated with the direction of each jump.
    pub fn route_to(&self, target: Point) -> Result<Vec<Waypoint>, Error> {
        let path = self.path_to(target)?;
        Ok(waypoints(&path))
    }
}

/// Reconstruct the shortest route to `target` recorded in `map`.
pub fn reconstruct_path(map: &DiscoveryMap, target: Point) -> Result<Vec<Point>, Error> {
    map.path_to(target)
}

/// Pair each position of `path` with the direction of the jump that leaves it.
pub fn waypoints(path: &[Point]) -> Vec<Waypoint> {
    path.iter()
        .enumerate()
        .map(|(i, &pos)| Waypoint {
            pos,
            next: path.get(i + 1).and_then(|&n| Dir::from_delta(n - pos)),
        })
        .collect()
}
