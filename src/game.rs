//! Live game management: undoable history and scripted playback
//!
//! [`Game`] is the reference caller of the outcome engine: it owns the live
//! grid and move history, rescans after every placed mark, and replays
//! synthesized sequences through the same per-move path a UI layer drives.

use serde::{Deserialize, Serialize};

use crate::{
    engine::{
        grid::{Grid, Move, Player},
        scan,
    },
    types::BoardSize,
};

/// A move that has been applied to the live grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub col: usize,
    pub row: usize,
    pub player: Player,
}

/// Standing of the game after a move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    InProgress,
    Win(Player),
    Draw,
}

/// A live game: grid, turn marker, and undoable move history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    to_move: Player,
    history: Vec<PlayedMove>,
    standing: Turn,
}

impl Game {
    /// Start a game on an empty board; player one moves first.
    pub fn new(size: BoardSize) -> Self {
        Game {
            grid: Grid::new(size),
            to_move: Player::One,
            history: Vec::new(),
            standing: Turn::InProgress,
        }
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Applied moves, oldest first. Its length always equals the number of
    /// occupied cells on the grid.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Current standing.
    pub fn standing(&self) -> Turn {
        self.standing
    }

    /// Apply the current player's mark at `(col, row)`.
    ///
    /// Places the mark, records it, rescans for a win, and checks for the
    /// full-board draw; otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Rejects play after the game is decided, out-of-bounds coordinates,
    /// and occupied cells.
    pub fn play(&mut self, col: usize, row: usize) -> crate::Result<Turn> {
        if self.standing != Turn::InProgress {
            return Err(crate::Error::GameOver);
        }

        self.grid.place(col, row, self.to_move)?;
        self.history.push(PlayedMove {
            col,
            row,
            player: self.to_move,
        });

        if scan::winner(&self.grid, self.to_move) {
            self.standing = Turn::Win(self.to_move);
        } else if self.grid.is_full() {
            self.standing = Turn::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.standing)
    }

    /// Undo the most recent move: pop it from the history, zero its cell,
    /// and hand the turn back to the player who made it. Undoing a deciding
    /// move reopens the game. Returns `None` on an empty history.
    pub fn undo(&mut self) -> Option<PlayedMove> {
        let last = self.history.pop()?;
        self.grid.clear(last.col, last.row);
        self.to_move = last.player;
        self.standing = Turn::InProgress;
        Some(last)
    }

    /// Cells to highlight once the game is won; empty otherwise.
    pub fn winning_cells(&self) -> Vec<Move> {
        match self.standing {
            Turn::Win(player) => scan::winning_cells(&self.grid, player),
            _ => Vec::new(),
        }
    }

    /// Feed a synthesized move list through the live-game API one move at a
    /// time, reporting the standing after each applied move. The external
    /// pacing (animation cadence) belongs to the caller.
    ///
    /// # Errors
    ///
    /// Fails on the first illegal move, which for an engine-produced list
    /// indicates a corrupted sequence.
    pub fn replay<F>(&mut self, moves: &[Move], mut on_move: F) -> crate::Result<Turn>
    where
        F: FnMut(&Game, Move, Turn),
    {
        let mut standing = self.standing;
        for &mv in moves {
            standing = self.play(mv.col, mv.row)?;
            on_move(self, mv, standing);
        }
        Ok(standing)
    }
}
