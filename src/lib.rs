//! Outcome engine for variable-size tic-tac-toe
//!
//! This crate provides:
//! - Win scanning over N×N grids (rows, columns, both full diagonals)
//! - Synthesis of randomized, legal move sequences that reproduce a
//!   requested outcome without letting the other player win early
//! - A live game controller with undoable history and scripted playback
//! - A quick-play CLI for driving both

pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod types;

pub use engine::grid::{Grid, Move, Player};
pub use engine::scan::{BoardReport, WinReport};
pub use engine::synthesis::{Diagonal, Outcome, OutcomeSpec, Synthesizer};
pub use error::{Error, Result};
pub use game::{Game, PlayedMove, Turn};
pub use types::BoardSize;
