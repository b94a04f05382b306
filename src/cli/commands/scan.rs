//! Scan command - report owned lines for a board given on the command line

use anyhow::Result;
use clap::Parser;

use crate::{Grid, Player, cli::output, engine::scan};

#[derive(Parser, Debug)]
#[command(about = "Scan a board string for winning lines")]
pub struct ScanArgs {
    /// Board cells, row-major: `.` empty, `X` player one, `O` player two;
    /// rows may be separated with `/`, e.g. "XXX/.O./O.."
    pub board: String,

    /// Emit the scan reports as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let grid = Grid::from_string(&args.board)?;

    if args.json {
        let reports = [Player::One, Player::Two].map(|player| scan::scan(&grid, player));
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    output::print_section(&format!("{} board", grid.size()));
    println!("{grid}");
    for player in [Player::One, Player::Two] {
        let report = scan::scan(&grid, player);
        println!("\nPlayer {player}:");
        output::print_kv("winner", if report.player_won { "yes" } else { "no" });
        output::print_kv("rows", &output::format_indices(&report.winning_rows));
        output::print_kv("columns", &output::format_indices(&report.winning_cols));
        output::print_kv(
            "major diagonal",
            if report.major_diagonal { "yes" } else { "no" },
        );
        output::print_kv(
            "minor diagonal",
            if report.minor_diagonal { "yes" } else { "no" },
        );
        if report.player_won {
            let cells: Vec<String> = scan::winning_cells(&grid, player)
                .iter()
                .map(|cell| cell.to_string())
                .collect();
            output::print_kv("winning cells", &cells.join(" "));
        }
    }
    Ok(())
}
