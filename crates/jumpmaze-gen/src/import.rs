//! Boards written out as comma-separated text.
//!
//! One line per row (`x`), one comma-separated token per column (`y`). An
//! empty token is an empty position, anything else must be a non-negative
//! integer jump distance. This is the format [`Board`]'s `Display` writes,
//! so an exported board imports back unchanged.

use jumpmaze_core::{Board, Cell, Point};

/// Errors that can occur when importing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The board must have an odd number of rows, at least 3, so it has a
    /// center cell, and no more than [`Board::MAX_SIDE`].
    #[error("board needs an odd number of rows between 3 and {max}; found {0}", max = Board::MAX_SIDE)]
    BadSide(usize),
    /// A row does not have one token per row of the board.
    #[error("row {row} has {found} values, expected {expected}")]
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A token is neither empty nor a non-negative integer.
    #[error("invalid value \u{201c}{token}\u{201d} at {pos}")]
    InvalidValue { token: String, pos: Point },
}

/// Parse a board from comma-separated rows.
///
/// Leading and trailing whitespace of the whole text is ignored, as are
/// carriage returns and whitespace around each token.
pub fn parse(s: &str) -> Result<Board, ImportError> {
    let lines: Vec<&str> = s.trim().lines().collect();
    let side = lines.len();
    if side < 3 || side % 2 == 0 || side > Board::MAX_SIDE as usize {
        return Err(ImportError::BadSide(side));
    }

    let mut board = Board::new(side as i32);
    for (x, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens.len() != side {
            return Err(ImportError::InconsistentSize {
                row: x,
                expected: side,
                found: tokens.len(),
            });
        }
        for (y, token) in tokens.into_iter().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            if token.is_empty() {
                continue;
            }
            let jump: u32 = token.parse().map_err(|_| ImportError::InvalidValue {
                token: token.to_string(),
                pos,
            })?;
            board.set(pos, Some(Cell(jump)));
        }
    }
    log::debug!(
        "imported {side}x{side} board: {} jump cells, {} exits",
        board.jump_count(),
        board.exit_count()
    );
    Ok(board)
}
