use anyhow::Context;
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

use sea_battle::{build_board, init_logging, AutomatedPlayer, MatchConfig, MatchController, BOARD_SIZE};

/// Play one automated match without a console and print the result as JSON.
#[derive(Parser)]
struct Args {
    /// Seed for the first side's fleet and moves.
    seed1: u64,
    /// Seed for the second side's fleet.
    seed2: u64,
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = MatchConfig {
        size: args.size,
        ..MatchConfig::default()
    };

    let mut rng1 = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);
    let b1 = build_board(&mut rng1, &config, false).context("placing first fleet")?;
    let b2 = build_board(&mut rng2, &config, false).context("placing second fleet")?;

    let mut game = MatchController::new(AutomatedPlayer::new(), b1, AutomatedPlayer::new(), b2);
    game.run(&mut rng1, |_, _| {}).context("match aborted")?;

    let summary = game.summary();
    let winner = summary.winner.map(|side| format!("{:?}", side).to_lowercase());
    let result = json!({
        "winner": winner,
        "summary": summary,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
