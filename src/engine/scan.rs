//! Winning-line analysis over grids
//!
//! A player owns a line when its mark sum reaches the target score
//! `N * mark`, with marks at +1/-1. All queries here are projections of a
//! single summing scan; there is deliberately no second scanning
//! implementation for the boolean form to drift from.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, Move, Player};

/// Result of scanning a grid for one player's winning lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinReport {
    /// Rows fully owned by the player, by row index.
    pub winning_rows: Vec<bool>,
    /// Columns fully owned by the player, by column index.
    pub winning_cols: Vec<bool>,
    /// The `col == row` diagonal is fully owned.
    pub major_diagonal: bool,
    /// The `col + row == N - 1` diagonal is fully owned.
    pub minor_diagonal: bool,
    /// The player owns at least one line.
    pub player_won: bool,
}

impl WinReport {
    /// At least one row is owned.
    pub fn row_win(&self) -> bool {
        self.winning_rows.iter().any(|&won| won)
    }

    /// At least one column is owned.
    pub fn col_win(&self) -> bool {
        self.winning_cols.iter().any(|&won| won)
    }
}

/// Both-player scan of a grid, used to reject draw candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardReport {
    pub first_player: WinReport,
    pub second_player: WinReport,
}

impl BoardReport {
    /// Both players own a line at once. A shuffled full grid can produce
    /// this; it disqualifies the grid as a draw just like a single win.
    pub fn simultaneous_win(&self) -> bool {
        self.first_player.player_won && self.second_player.player_won
    }
}

/// Scan a grid for every line owned by `player`.
pub fn scan(grid: &Grid, player: Player) -> WinReport {
    let n = grid.dim();
    let target = n as i32 * i32::from(player.mark());

    let mut report = WinReport {
        winning_rows: vec![false; n],
        winning_cols: vec![false; n],
        major_diagonal: false,
        minor_diagonal: false,
        player_won: false,
    };

    for row in 0..n {
        let total: i32 = (0..n).map(|col| i32::from(grid.get(col, row))).sum();
        report.winning_rows[row] = total == target;
    }
    for col in 0..n {
        let total: i32 = (0..n).map(|row| i32::from(grid.get(col, row))).sum();
        report.winning_cols[col] = total == target;
    }

    let major: i32 = (0..n).map(|i| i32::from(grid.get(i, i))).sum();
    let minor: i32 = (0..n).map(|i| i32::from(grid.get(i, n - 1 - i))).sum();
    report.major_diagonal = major == target;
    report.minor_diagonal = minor == target;

    report.player_won =
        report.row_win() || report.col_win() || report.major_diagonal || report.minor_diagonal;
    report
}

/// Check if `player` owns any line. Called after every live move.
///
/// # Examples
///
/// ```
/// use rigtac::{Grid, Player, engine::scan};
///
/// let grid = Grid::from_string("XXX/OO./...").unwrap();
/// assert!(scan::winner(&grid, Player::One));
/// assert!(!scan::winner(&grid, Player::Two));
/// ```
pub fn winner(grid: &Grid, player: Player) -> bool {
    scan(grid, player).player_won
}

/// Every cell belonging to every line `player` currently owns, sorted and
/// deduplicated. Drives highlight animation; with simultaneous wins all
/// lines are included.
pub fn winning_cells(grid: &Grid, player: Player) -> Vec<Move> {
    let n = grid.dim();
    let report = scan(grid, player);
    let mut cells = Vec::new();

    for (row, _) in report.winning_rows.iter().enumerate().filter(|&(_, &w)| w) {
        cells.extend((0..n).map(|col| Move::new(col, row)));
    }
    for (col, _) in report.winning_cols.iter().enumerate().filter(|&(_, &w)| w) {
        cells.extend((0..n).map(|row| Move::new(col, row)));
    }
    if report.major_diagonal {
        cells.extend((0..n).map(|i| Move::new(i, i)));
    }
    if report.minor_diagonal {
        cells.extend((0..n).map(|i| Move::new(i, n - 1 - i)));
    }

    cells.sort();
    cells.dedup();
    cells
}

/// Scan both players at once. Returns `None` when neither owns a line,
/// which is what draw generation is looking for.
pub fn find_wins(grid: &Grid) -> Option<BoardReport> {
    let report = BoardReport {
        first_player: scan(grid, Player::One),
        second_player: scan(grid, Player::Two),
    };
    if report.first_player.player_won || report.second_player.player_won {
        Some(report)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_win() {
        let grid = Grid::from_string("...XXX...").unwrap();
        let report = scan(&grid, Player::One);
        assert!(report.player_won);
        assert!(report.row_win());
        assert_eq!(report.winning_rows, vec![false, true, false]);
        assert!(!report.col_win());
        assert!(!scan(&grid, Player::Two).player_won);
    }

    #[test]
    fn test_column_win() {
        let grid = Grid::from_string("O..O..O..").unwrap();
        let report = scan(&grid, Player::Two);
        assert!(report.player_won);
        assert_eq!(report.winning_cols, vec![true, false, false]);
        assert!(!scan(&grid, Player::One).player_won);
    }

    #[test]
    fn test_diagonal_wins() {
        let major = Grid::from_string("X...X...X").unwrap();
        assert!(scan(&major, Player::One).major_diagonal);
        assert!(!scan(&major, Player::One).minor_diagonal);

        let minor = Grid::from_string("..O.O.O..").unwrap();
        assert!(scan(&minor, Player::Two).minor_diagonal);
        assert!(!scan(&minor, Player::Two).major_diagonal);
    }

    #[test]
    fn test_partial_line_is_not_a_win() {
        let grid = Grid::from_string("XX.OO....").unwrap();
        assert!(!winner(&grid, Player::One));
        assert!(!winner(&grid, Player::Two));
    }

    #[test]
    fn test_mixed_line_sums_do_not_trigger() {
        // Row 0 sums to +1, which must not read as a win at any size.
        let grid = Grid::from_string("XXO/OXX/XOO").unwrap();
        assert!(!winner(&grid, Player::One));
        assert!(!winner(&grid, Player::Two));
        assert!(find_wins(&grid).is_none());
    }

    #[test]
    fn test_winning_cells_single_row() {
        let grid = Grid::from_string("...XXX...").unwrap();
        let cells = winning_cells(&grid, Player::One);
        assert_eq!(
            cells,
            vec![Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)]
        );
    }

    #[test]
    fn test_winning_cells_intersecting_lines() {
        // Row 0 and column 0 both belong to X; the shared corner shows up once.
        let grid = Grid::from_string("XXX/XOO/X.O").unwrap();
        let cells = winning_cells(&grid, Player::One);
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&Move::new(0, 0)));
        assert!(cells.contains(&Move::new(0, 2)));
        assert!(cells.contains(&Move::new(2, 0)));
    }

    #[test]
    fn test_find_wins_both_players() {
        let grid = Grid::from_string("XXX/OOO/...").unwrap();
        let report = find_wins(&grid).expect("both rows are owned");
        assert!(report.simultaneous_win());
        assert!(report.first_player.winning_rows[0]);
        assert!(report.second_player.winning_rows[1]);
    }

    #[test]
    fn test_find_wins_none_on_draw_board() {
        // The classic no-win full board.
        let grid = Grid::from_string("XOX/XOO/OXX").unwrap();
        assert!(find_wins(&grid).is_none());
    }

    #[test]
    fn test_four_by_four_scan() {
        let grid = Grid::from_string("XXXX/OO../..O./...O").unwrap();
        let report = scan(&grid, Player::One);
        assert!(report.winning_rows[0]);
        assert!(!scan(&grid, Player::Two).player_won);
    }
}
