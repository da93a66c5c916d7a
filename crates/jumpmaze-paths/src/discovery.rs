use std::collections::VecDeque;

use jumpmaze_core::{Board, Cell, Error, Point};

use crate::moves::{JumpRules, Jumper};
use crate::traits::Pather;

/// Search record for one reached cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveryNode {
    pub pos: Point,
    /// Fewest jumps needed to reach `pos` from the start.
    pub depth: u32,
    /// Cell this one was first reached from; `None` only for the start.
    pub parent: Option<Point>,
    /// Exit difficulty in `[0, 1]`. Set for exit cells only.
    pub rating: Option<f64>,
}

impl DiscoveryNode {
    /// Whether this node is a rated exit.
    pub fn is_exit(&self) -> bool {
        self.rating.is_some()
    }
}

/// Result of a breadth-first search from the start cell.
///
/// Nodes are keyed by the board's linear index. Each reached cell has exactly
/// one node, and its depth is the true shortest jump count.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DiscoveryRepr"))]
pub struct DiscoveryMap {
    pub(crate) side: i32,
    pub(crate) start: Point,
    pub(crate) nodes: Vec<Option<DiscoveryNode>>,
    // linear indices in the order they were reached
    pub(crate) order: Vec<usize>,
    pub(crate) exits: Vec<usize>,
    pub(crate) max_exit_depth: u32,
}

/// Unchecked serialized form of a [`DiscoveryMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DiscoveryRepr {
    side: i32,
    start: Point,
    nodes: Vec<Option<DiscoveryNode>>,
    order: Vec<usize>,
    exits: Vec<usize>,
    max_exit_depth: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<DiscoveryRepr> for DiscoveryMap {
    type Error = Error;

    fn try_from(r: DiscoveryRepr) -> Result<Self, Error> {
        let fits = (0..=Board::MAX_SIDE).contains(&r.side)
            && r.nodes.len() == r.side as usize * r.side as usize;
        if !fits {
            return Err(Error::BadLayout {
                side: r.side,
                len: r.nodes.len(),
            });
        }
        let len = r.nodes.len();
        if let Some(&index) = r.order.iter().chain(&r.exits).find(|&&i| i >= len) {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(Self {
            side: r.side,
            start: r.start,
            nodes: r.nodes,
            order: r.order,
            exits: r.exits,
            max_exit_depth: r.max_exit_depth,
        })
    }
}

/// Run the reachability search on `board` from `start` under `rules`.
///
/// Fails if `start` is off the board or not in play. A board with no
/// reachable exit is a valid result: [`DiscoveryMap::exits`] is then empty.
pub fn discover(board: &Board, start: Point, rules: JumpRules) -> Result<DiscoveryMap, Error> {
    board.cell(start)?;
    let map = DiscoveryMap::search(board, &Jumper::new(board, rules), start);
    log::debug!(
        "discovery from {start}: {} reachable, {} exits, max exit depth {}",
        map.len(),
        map.exits.len(),
        map.max_exit_depth
    );
    Ok(map)
}

impl DiscoveryMap {
    /// Breadth-first search over the edges `pather` reports, starting at
    /// `start`. Cells whose board value is 0 are collected as exits and
    /// rated once the frontier is exhausted.
    pub fn search<P: Pather>(board: &Board, pather: &P, start: Point) -> Self {
        let mut map = Self {
            side: board.side(),
            start,
            nodes: vec![None; board.len()],
            order: Vec::new(),
            exits: Vec::new(),
            max_exit_depth: 0,
        };
        let Some(si) = board.idx(start) else {
            return map;
        };
        let is_exit = |p: Point| board.get(p).is_some_and(Cell::is_exit);

        map.nodes[si] = Some(DiscoveryNode {
            pos: start,
            depth: 0,
            parent: None,
            rating: None,
        });
        map.order.push(si);
        if is_exit(start) {
            map.exits.push(si);
        }

        let mut queue: VecDeque<(Point, u32)> = VecDeque::new();
        queue.push_back((start, 0));
        let mut nbuf = Vec::with_capacity(4);

        while let Some((cp, depth)) = queue.pop_front() {
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = board.idx(np) else {
                    continue;
                };
                if map.nodes[ni].is_some() {
                    continue;
                }
                map.nodes[ni] = Some(DiscoveryNode {
                    pos: np,
                    depth: depth + 1,
                    parent: Some(cp),
                    rating: None,
                });
                map.order.push(ni);
                queue.push_back((np, depth + 1));
                if is_exit(np) {
                    map.exits.push(ni);
                }
            }
        }

        map.rate_exits();
        map
    }

    fn rate_exits(&mut self) {
        let deepest = self
            .exits
            .iter()
            .filter_map(|&i| self.nodes[i].map(|n| n.depth))
            .max()
            .unwrap_or(0);
        self.max_exit_depth = deepest;
        let scale = f64::from(deepest.max(1));
        for &i in &self.exits {
            if let Some(node) = self.nodes[i].as_mut() {
                node.rating = Some(f64::from(node.depth) / scale);
            }
        }
    }

    /// The position the search started from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Side of the board that was searched.
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Linear index of `p`, or `None` if off the searched board.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.side || p.y >= self.side {
            return None;
        }
        Some(p.x as usize * self.side as usize + p.y as usize)
    }

    /// Node for `p`, if it was reached.
    pub fn get(&self, p: Point) -> Option<&DiscoveryNode> {
        self.idx(p).and_then(|i| self.nodes[i].as_ref())
    }

    /// Node for a linear index, if it was reached.
    pub fn get_index(&self, idx: usize) -> Option<&DiscoveryNode> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    /// Whether `p` was reached.
    pub fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// Shortest jump count to `p`, if reached.
    pub fn depth(&self, p: Point) -> Option<u32> {
        self.get(p).map(|n| n.depth)
    }

    /// Difficulty rating of the exit at `p`, if it is a reached exit.
    pub fn rating(&self, p: Point) -> Option<f64> {
        self.get(p).and_then(|n| n.rating)
    }

    /// Number of reached cells, the start included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was reached (the start was off the board).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reached nodes in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &DiscoveryNode> + '_ {
        self.order.iter().filter_map(|&i| self.nodes[i].as_ref())
    }

    /// Reached exits in discovery order (non-decreasing depth).
    pub fn exits(&self) -> impl Iterator<Item = &DiscoveryNode> + '_ {
        self.exits.iter().filter_map(|&i| self.nodes[i].as_ref())
    }

    /// Number of reached exits.
    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }

    /// Whether the board can be solved from the start.
    pub fn is_solvable(&self) -> bool {
        !self.exits.is_empty()
    }

    /// Largest depth among reached exits; 0 when there are none.
    pub fn max_exit_depth(&self) -> u32 {
        self.max_exit_depth
    }

    /// The first exit reached, which has the smallest depth.
    pub fn easiest_exit(&self) -> Option<&DiscoveryNode> {
        self.exits().next()
    }

    /// The last exit reached, which has the largest depth.
    pub fn hardest_exit(&self) -> Option<&DiscoveryNode> {
        self.exits().last()
    }
}
