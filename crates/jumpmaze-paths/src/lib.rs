//! Jump legality and search for jump mazes.
//!
//! This crate provides the three algorithms that give a generated board its
//! meaning:
//!
//! - **Move legality** ([`JumpRules::legal_moves`]): which jumps a cell allows
//! - **Reachability** ([`discover`]): breadth-first search from the start,
//!   recording depth and parent per reached cell and rating each exit
//! - **Route reconstruction** ([`DiscoveryMap::path_to`]): the shortest jump
//!   sequence to any reached cell
//!
//! The search works on the implicit graph the legality rule defines; no
//! adjacency list is ever built. Edges come through the [`Pather`] trait, which
//! [`Jumper`] implements for a board and a rule set.

mod discovery;
mod moves;
mod route;
mod traits;

pub use discovery::{DiscoveryMap, DiscoveryNode, discover};
pub use moves::{JumpRules, Jumper, legal_moves};
pub use route::{Waypoint, reconstruct_path, waypoints};
pub use traits::Pather;
