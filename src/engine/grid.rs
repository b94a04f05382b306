//! Grid storage and move primitives

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::BoardSize;

/// A player in the game. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The mark this player writes into the grid.
    pub fn mark(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The symbol conventionally shown for this player.
    pub fn to_char(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// Recover a player from a grid mark. `0` has no owner.
    pub fn from_mark(mark: i8) -> Option<Player> {
        match mark {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A board cell coordinate, `(column, row)` with the origin in the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub col: usize,
    pub row: usize,
}

impl Move {
    pub fn new(col: usize, row: usize) -> Self {
        Move { col, row }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// An N×N grid of marks: `0` empty, `+1` player one, `-1` player two.
///
/// The grid is plain storage. It enforces bounds and one-mark-per-cell on
/// [`place`](Grid::place) and nothing else; turn order and outcome tracking
/// live in [`crate::game::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: BoardSize,
    cells: Vec<i8>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: BoardSize) -> Self {
        Grid {
            size,
            cells: vec![0; size.cell_count()],
        }
    }

    /// Build a grid from a flat mark array, `(col, row)` keyed as
    /// `col * N + row`. Length must match the board.
    pub(crate) fn from_marks(size: BoardSize, cells: Vec<i8>) -> Self {
        debug_assert_eq!(cells.len(), size.cell_count());
        Grid { size, cells }
    }

    /// The board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The board dimension N.
    pub fn dim(&self) -> usize {
        self.size.value()
    }

    fn index(&self, col: usize, row: usize) -> usize {
        col * self.dim() + row
    }

    /// Mark at `(col, row)`. Panics when the coordinate is off the board.
    pub fn get(&self, col: usize, row: usize) -> i8 {
        self.cells[self.index(col, row)]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, col: usize, row: usize) -> bool {
        self.get(col, row) == 0
    }

    /// Place a player's mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] for coordinates off the board
    /// and [`crate::Error::CellOccupied`] when the cell already holds a mark.
    pub fn place(&mut self, col: usize, row: usize, player: Player) -> Result<(), crate::Error> {
        let n = self.dim();
        if col >= n || row >= n {
            return Err(crate::Error::OutOfBounds { col, row, size: n });
        }
        if !self.is_empty(col, row) {
            return Err(crate::Error::CellOccupied { col, row });
        }
        let idx = self.index(col, row);
        self.cells[idx] = player.mark();
        Ok(())
    }

    /// Write a mark without the empty-cell check. Synthesis stamps lines
    /// into grids it owns, so the legality argument is structural there.
    pub(crate) fn set(&mut self, col: usize, row: usize, mark: i8) {
        let idx = self.index(col, row);
        self.cells[idx] = mark;
    }

    /// Zero a cell. Undo support.
    pub(crate) fn clear(&mut self, col: usize, row: usize) {
        self.set(col, row, 0);
    }

    /// All empty cells, column-major.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells_with(|mark| mark == 0)
    }

    /// All cells holding `player`'s mark, column-major.
    pub fn cells_of(&self, player: Player) -> Vec<Move> {
        self.cells_with(|mark| mark == player.mark())
    }

    fn cells_with(&self, keep: impl Fn(i8) -> bool) -> Vec<Move> {
        let n = self.dim();
        let mut cells = Vec::new();
        for col in 0..n {
            for row in 0..n {
                if keep(self.get(col, row)) {
                    cells.push(Move::new(col, row));
                }
            }
        }
        cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&mark| mark != 0).count()
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != 0)
    }

    /// Parse a grid from a string representation.
    ///
    /// Cells are row-major: `.` empty, `X`/`x` player one, `O`/`o` player
    /// two. Whitespace and `/` row separators are filtered out, so
    /// `"XXX/.O./O.."` and multi-line layouts both work. The remaining cell
    /// count must fill a square board.
    ///
    /// # Errors
    ///
    /// Returns an error when the cell count is not a positive perfect
    /// square or any character is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let len = cleaned.len();
        let mut dim = 0;
        while dim * dim < len {
            dim += 1;
        }
        if len == 0 || dim * dim != len {
            return Err(crate::Error::InvalidBoardLength { got: len });
        }

        let size = BoardSize::new(dim)?;
        let mut grid = Grid::new(size);
        for (i, &c) in cleaned.iter().enumerate() {
            let mark = match c {
                '.' => 0,
                'X' | 'x' => 1,
                'O' | 'o' => -1,
                _ => {
                    return Err(crate::Error::InvalidCellCharacter {
                        character: c,
                        position: i,
                    });
                }
            };
            grid.set(i % dim, i / dim, mark);
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dim();
        for row in 0..n {
            for col in 0..n {
                let c = match Player::from_mark(self.get(col, row)) {
                    Some(player) => player.to_char(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            if row < n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
