//! Playing a jump maze: a session owns one board, tracks the player on it
//! and knows how each position should be drawn.

pub mod config;
pub mod error;
pub mod session;
pub mod shade;

pub use config::GameConfig;
pub use error::GameError;
pub use session::{Session, Status};
pub use shade::{Color, Shade, difficulty_color};
