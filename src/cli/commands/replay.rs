//! Replay command - animate a synthesized sequence through a live game

use std::{thread, time::Duration};

use anyhow::Result;
use clap::Parser;

use crate::{
    Game, Synthesizer, Turn,
    cli::{commands::synth::OutcomeArgs, output},
};

#[derive(Parser, Debug)]
#[command(about = "Synthesize a sequence and play it back move by move")]
pub struct ReplayArgs {
    #[command(flatten)]
    pub outcome: OutcomeArgs,

    /// Pause between moves, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let spec = args.outcome.to_spec()?;
    let mut synthesizer = Synthesizer::new(args.outcome.seed);
    let Some(moves) = synthesizer.synthesize(&spec)? else {
        println!("No draw arrangement found within the retry budget; try another seed or board size.");
        return Ok(());
    };

    let mut game = Game::new(spec.size);
    let bar = output::create_replay_progress(moves.len() as u64);
    let delay = Duration::from_millis(args.delay_ms);

    let standing = game.replay(&moves, |game, mv, _| {
        bar.inc(1);
        bar.suspend(|| {
            if let Some(played) = game.history().last() {
                println!("\n{} plays {}", played.player, mv);
            }
            println!("{}", game.grid());
        });
        thread::sleep(delay);
    })?;
    bar.finish_and_clear();

    match standing {
        Turn::Win(player) => {
            println!("\n{player} wins the game!");
            let cells: Vec<String> = game
                .winning_cells()
                .iter()
                .map(|cell| cell.to_string())
                .collect();
            output::print_kv("winning cells", &cells.join(" "));
        }
        Turn::Draw => println!("\nThe game ended in a draw."),
        Turn::InProgress => println!("\nPlayback ended mid-game."),
    }
    Ok(())
}
