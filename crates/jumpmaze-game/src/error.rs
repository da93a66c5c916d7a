use jumpmaze_core::Point;
use jumpmaze_gen::ImportError;

/// Errors a game session reports to its front end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] jumpmaze_core::Error),
    #[error(transparent)]
    Import(#[from] ImportError),
    /// The requested landing is not in the current legal-move set.
    #[error("no legal jump from {from} lands on {to}")]
    IllegalMove { from: Point, to: Point },
}
