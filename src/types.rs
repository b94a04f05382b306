//! Newtype wrappers for validated domain values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board dimension N for an N×N game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Create a board size, validating it is at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardSize`] for a zero dimension.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value >= 1 {
            Ok(BoardSize(value))
        } else {
            Err(crate::Error::InvalidBoardSize { size: value })
        }
    }

    /// Get the inner dimension.
    pub fn value(&self) -> usize {
        self.0
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.0 * self.0
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimension() {
        assert!(BoardSize::new(0).is_err());
    }

    #[test]
    fn cell_count_is_square() {
        let size = BoardSize::new(4).unwrap();
        assert_eq!(size.cell_count(), 16);
    }
}
