//! rigtac CLI - quick-play tool for the outcome engine
//!
//! This binary drives the engine the way the game's developer tooling
//! does: script an outcome, watch it replayed move by move, or scan a
//! board handed in on the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rigtac")]
#[command(version, about = "Scripted tic-tac-toe outcomes for demos and tests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a move sequence for a chosen outcome
    Synth(rigtac::cli::commands::synth::SynthArgs),

    /// Synthesize a sequence and play it back move by move
    Replay(rigtac::cli::commands::replay::ReplayArgs),

    /// Scan a board string for winning lines
    Scan(rigtac::cli::commands::scan::ScanArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Synth(args) => rigtac::cli::commands::synth::execute(args),
        Commands::Replay(args) => rigtac::cli::commands::replay::execute(args),
        Commands::Scan(args) => rigtac::cli::commands::scan::execute(args),
    }
}
