//! Command-line driver for the stone alignment puzzle.
//!
//! Builds a puzzle, prints its clues, turns every disc once, applies the
//! solution, and reports whether the lock opened.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- --level full --seed 7
//! ```
//!
//! Choose the stones explicitly (installation order is chain order):
//!
//! ```sh
//! cargo run -- --stones cavernstone --stones worldstone
//! ```
//!
//! Fix the solution instead of drawing a random one:
//!
//! ```sh
//! cargo run -- --level intermediate --solution cavernstone=resonance_water --solution godstone=apsu
//! ```
//!
//! Load another orientation document and print the final state as JSON:
//!
//! ```sh
//! cargo run -- --data orientations.json --json
//! ```

use std::{path::PathBuf, process};

use clap::{Parser, ValueEnum};
use stonelock_core::StoneType;
use stonelock_puzzle::{PuzzleFactory, PuzzleLevel, Solution, StonePuzzle};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    Basic,
    Intermediate,
    Full,
}

impl From<LevelArg> for PuzzleLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Basic => Self::Basic,
            LevelArg::Intermediate => Self::Intermediate,
            LevelArg::Full => Self::Full,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Preset disc set.
    #[arg(long, value_name = "LEVEL", default_value = "full", conflicts_with = "stones")]
    level: LevelArg,

    /// Stone to install, in chain order. Repeatable.
    #[arg(long = "stones", value_name = "STONE", num_args = 1..)]
    stones: Vec<StoneType>,

    /// Seed for the random solution.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Orientation document to load instead of the bundled one.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Target symbol as `stone=symbol`. Repeatable.
    #[arg(long = "solution", value_name = "STONE=SYMBOL", num_args = 1..)]
    solution: Vec<String>,

    /// Print the final state as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let factory = match &args.data {
        Some(path) => PuzzleFactory::from_path(path),
        None => PuzzleFactory::embedded(),
    };
    let factory = match factory {
        Ok(factory) => factory,
        Err(err) => {
            log::error!("Failed to load orientation data: {err}");
            eprintln!("Failed to load orientation data: {err}");
            process::exit(1);
        }
    };
    let factory = match args.seed {
        Some(seed) => factory.with_seed(seed),
        None => factory,
    };

    let solution = if args.solution.is_empty() {
        None
    } else {
        match args.solution.join(",").parse::<Solution>() {
            Ok(solution) => Some(solution),
            Err(err) => {
                eprintln!("Invalid solution: {err}");
                process::exit(2);
            }
        }
    };

    let stones = if args.stones.is_empty() {
        PuzzleLevel::from(args.level).stones()
    } else {
        args.stones.as_slice()
    };
    let mut puzzle = factory.create_custom_puzzle(stones, solution);

    log::info!("Initial state: {}", puzzle.state());
    log::info!("Solution: {}", puzzle.solution());

    println!("Clues:");
    for clue in puzzle.clues_for_solution() {
        println!("  {clue}");
    }

    turn_every_disc(&mut puzzle);

    puzzle.apply_solution();
    let state = puzzle.state();
    log::info!("Final state: {state}");

    if args.json {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("Failed to serialize the final state: {err}"),
        }
    } else {
        println!("{state}");
    }
    println!("{}", if state.is_solved { "Solved" } else { "Not solved" });
}

fn turn_every_disc(puzzle: &mut StonePuzzle) {
    let stones = puzzle
        .discs()
        .iter()
        .map(stonelock_core::Disc::stone_type)
        .collect::<Vec<_>>();
    for stone in stones {
        log::info!("Before turning {stone}: {}", puzzle.state());
        if let Some(disc) = puzzle.disc_mut(stone) {
            disc.rotate(1);
        }
        log::info!("After turning {stone}: {}", puzzle.state());
    }
}
