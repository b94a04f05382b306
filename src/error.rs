//! Error types for the rigtac crate

use thiserror::Error;

/// Main error type for the rigtac crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size} (boards must be at least 1x1)")]
    InvalidBoardSize { size: usize },

    #[error("line index {index} is out of range for a {size}x{size} board")]
    InvalidLineIndex { index: usize, size: usize },

    #[error("cell ({col}, {row}) is out of bounds on a {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },

    #[error("cell ({col}, {row}) is already occupied")]
    CellOccupied { col: usize, row: usize },

    #[error("game already over")]
    GameOver,

    #[error(
        "no legal game can produce this outcome: {fillers} opponent moves do not fit in {free} free cells"
    )]
    UnsatisfiableOutcome { fillers: usize, free: usize },

    #[error("gave up after {attempts} attempts to build a grid without an accidental opponent win")]
    SynthesisExhausted { attempts: u32 },

    #[error("board string has {got} cells, which does not fill a square board")]
    InvalidBoardLength { got: usize },

    #[error("invalid character '{character}' at cell {position} in board string")]
    InvalidCellCharacter { character: char, position: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
