use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::ui::{describe_outcome, BoardView, MoveLabel};
use sea_battle::{
    build_board, init_logging, AutomatedPlayer, HumanPlayer, MatchConfig, MatchController,
    MatchError, MoveError, Player, Side, TurnReport, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle on the console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, help = "Side length of both boards")]
        size: usize,
    },
    /// Watch two computer players against each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, help = "Side length of both boards")]
        size: usize,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        size: BOARD_SIZE,
    }) {
        Commands::Play { seed, size } => play(seed, size),
        Commands::Watch { seed, size } => watch(seed, size),
    }
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn config_for(size: usize) -> MatchConfig {
    MatchConfig {
        size,
        ..MatchConfig::default()
    }
}

fn greet(fleet_len: usize) {
    println!("{}", "_".repeat(60));
    println!("Welcome to Sea Battle!");
    println!("You are playing against the computer.");
    println!("Both fleets are already placed on the boards.");
    println!("Enter a move as \"column row\", for example: 3 5");
    println!("A hit gives you another shot; a miss passes the turn.");
    println!("Whoever sinks all {} enemy ships first wins.", fleet_len);
    println!("Good luck, Admiral!");
}

fn print_boards<A: Player, B: Player>(game: &MatchController<A, B>) {
    println!("{}", "_".repeat(60));
    println!("{}'s board:", game.name(Side::First));
    println!("{}", BoardView(game.board(Side::First)));
    println!("{}", "_".repeat(60));
    println!("{}'s board:", game.name(Side::Second));
    println!("{}", BoardView(game.board(Side::Second)));
}

fn report_move(shooter: &str, report: &TurnReport) {
    if let Some(target) = report.target {
        println!(
            "{} -> {}: {}",
            shooter,
            MoveLabel(target),
            describe_outcome(report.outcome)
        );
    }
}

fn play(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let config = config_for(size);
    let human_board = build_board(&mut rng, &config, false).context("placing your fleet")?;
    let computer_board =
        build_board(&mut rng, &config, true).context("placing the computer's fleet")?;

    let mut game = MatchController::new(
        HumanPlayer::stdio(),
        human_board,
        AutomatedPlayer::new(),
        computer_board,
    );
    greet(config.fleet.len());

    loop {
        if game.active() == Side::First {
            print_boards(&game);
        }
        let report = match game.play_turn(&mut rng) {
            Ok(report) => report,
            Err(MatchError::Move {
                source: MoveError::InputClosed,
                ..
            }) => {
                println!();
                println!("Input closed, leaving the game.");
                return Ok(());
            }
            Err(e) => return Err(e).context("turn failed"),
        };
        report_move(game.name(report.shooter), &report);
        if let Some(winner) = report.winner {
            print_boards(&game);
            match winner {
                Side::First => println!("Congratulations! You won!"),
                Side::Second => println!("Unfortunately the computer won."),
            }
            return Ok(());
        }
    }
}

fn watch(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let config = config_for(size);
    let first = build_board(&mut rng, &config, false).context("placing the first fleet")?;
    let second = build_board(&mut rng, &config, false).context("placing the second fleet")?;

    let mut game = MatchController::new(AutomatedPlayer::new(), first, AutomatedPlayer::new(), second);
    print_boards(&game);
    let winner = game
        .run(&mut rng, |report, _| {
            report_move(&format!("{:?}", report.shooter), report)
        })
        .context("match aborted")?;
    print_boards(&game);
    let summary = game.summary();
    println!(
        "{:?} side wins after {} and {} shots.",
        winner, summary.shots_first, summary.shots_second
    );
    Ok(())
}
