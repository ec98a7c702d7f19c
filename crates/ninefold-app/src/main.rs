//! Ninefold command-line front end.
//!
//! Each invocation is one command against a persisted session: the save
//! store carries the game state between runs, so `new` starts and saves a
//! game, while `set`, `clear`, and `hint` load the player's latest save,
//! apply the command, and save again. Window/graphics presentation is out
//! of scope here; this front end drives the same session commands a
//! graphical shell would.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use ninefold_generator::Difficulty;
use ninefold_store::JsonFileStore;

use crate::error::AppError;

mod commands;
mod error;
mod render;
mod session_codec;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the save file (defaults to the platform data directory).
    #[arg(long, value_name = "FILE")]
    save_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start a new game for a player and save it.
    New {
        /// Player name the session is saved under.
        player: String,
        /// Difficulty tier.
        #[arg(long, value_enum, default_value_t = DifficultyArg::Easy)]
        difficulty: DifficultyArg,
        /// Generation seed; omit for a random puzzle.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the latest saved board for a player.
    Show {
        /// Player name to look up.
        player: String,
    },
    /// Enter a digit at column X, row Y (both 0-8) and save.
    Set {
        /// Player name to look up.
        player: String,
        /// Column, 0-8 left to right.
        x: u8,
        /// Row, 0-8 top to bottom.
        y: u8,
        /// Digit 1-9. Out-of-range values are ignored.
        digit: u8,
    },
    /// Clear the cell at column X, row Y (both 0-8) and save.
    Clear {
        /// Player name to look up.
        player: String,
        /// Column, 0-8 left to right.
        x: u8,
        /// Row, 0-8 top to bottom.
        y: u8,
    },
    /// Reveal one cell with a hint and save.
    Hint {
        /// Player name to look up.
        player: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let save_path = match args.save_file {
        Some(path) => path,
        None => JsonFileStore::default_path().ok_or(AppError::NoSavePath)?,
    };
    let mut store = JsonFileStore::new(save_path);

    match args.command {
        Command::New {
            player,
            difficulty,
            seed,
        } => commands::new_game(&mut store, &player, difficulty.into(), seed),
        Command::Show { player } => commands::show(&store, &player),
        Command::Set { player, x, y, digit } => commands::set(&mut store, &player, x, y, digit),
        Command::Clear { player, x, y } => commands::clear(&mut store, &player, x, y),
        Command::Hint { player } => commands::hint(&mut store, &player),
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
