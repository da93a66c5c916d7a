//! Board sources for jump mazes: seeded generation and text import.

pub mod import;
pub mod mapgen;

pub use import::{ImportError, parse};
pub use mapgen::{BoardGen, generate};
