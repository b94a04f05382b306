//! Synth command - synthesize a scripted move sequence

use anyhow::{Result, bail};
use clap::{Args, Parser, ValueEnum};

use crate::{
    BoardSize, Player, Synthesizer,
    cli::output,
    engine::synthesis::{Diagonal, Outcome, OutcomeSpec},
};

/// Outcome kinds selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutcomeKind {
    Row,
    Column,
    DiagMajor,
    DiagMinor,
    Draw,
}

/// Which player the scripted game is rigged for.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WinnerArg {
    One,
    Two,
}

impl From<WinnerArg> for Player {
    fn from(arg: WinnerArg) -> Self {
        match arg {
            WinnerArg::One => Player::One,
            WinnerArg::Two => Player::Two,
        }
    }
}

/// Outcome selection shared by `synth` and `replay`.
#[derive(Args, Debug)]
pub struct OutcomeArgs {
    /// Board dimension (3 for 3x3, 4 for 4x4, ...)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub size: usize,

    /// Outcome to script
    #[arg(long, short = 'k', value_enum)]
    pub outcome: OutcomeKind,

    /// Row or column index; required for row and column outcomes
    #[arg(long, short = 'i')]
    pub index: Option<usize>,

    /// Which player wins (ignored for draws)
    #[arg(long, short = 'w', value_enum, default_value = "one")]
    pub winner: WinnerArg,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl OutcomeArgs {
    /// Build the engine spec, validating index requirements.
    pub fn to_spec(&self) -> Result<OutcomeSpec> {
        let size = BoardSize::new(self.size)?;
        let outcome = match self.outcome {
            OutcomeKind::Row => Outcome::Row {
                index: self.require_index("row")?,
            },
            OutcomeKind::Column => Outcome::Column {
                index: self.require_index("column")?,
            },
            OutcomeKind::DiagMajor => Outcome::Diagonal(Diagonal::Major),
            OutcomeKind::DiagMinor => Outcome::Diagonal(Diagonal::Minor),
            OutcomeKind::Draw => Outcome::Draw,
        };
        Ok(OutcomeSpec {
            size,
            winner: self.winner.into(),
            outcome,
        })
    }

    fn require_index(&self, kind: &str) -> Result<usize> {
        match self.index {
            Some(index) => Ok(index),
            None => bail!("--index is required for {kind} outcomes"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Synthesize a move sequence for a chosen outcome")]
pub struct SynthArgs {
    #[command(flatten)]
    pub outcome: OutcomeArgs,

    /// Emit the move list as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SynthArgs) -> Result<()> {
    let spec = args.outcome.to_spec()?;
    let mut synthesizer = Synthesizer::new(args.outcome.seed);
    let Some(moves) = synthesizer.synthesize(&spec)? else {
        println!("No draw arrangement found within the retry budget; try another seed or board size.");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&moves)?);
        return Ok(());
    }

    output::print_section(&format!("Scripted {} game, {} moves", spec.size, moves.len()));
    for (i, mv) in moves.iter().enumerate() {
        let player = if i % 2 == 0 { Player::One } else { Player::Two };
        println!("  {:2}. {player} -> {mv}", i + 1);
    }
    Ok(())
}
