//! Core types for the jump maze puzzle.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace: geometry primitives, the board model and the seeded sequence
//! generator boards are built from.

pub mod board;
pub mod error;
pub mod geom;
pub mod lcg;

pub use board::{Board, Cell};
pub use error::Error;
pub use geom::{Dir, Point};
pub use lcg::Lcg;
