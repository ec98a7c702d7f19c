//! CLI command implementations.
//!
//! Mutating commands follow the same shape: load the player's latest save,
//! apply one session command, save, and print the result. A player with no
//! saves gets a "no save available" message, not an error, and the store is
//! left untouched.

use ninefold_core::Position;
use ninefold_game::Session;
use ninefold_generator::{Difficulty, PuzzleGenerator};
use ninefold_store::SaveStore;

use crate::{error::AppError, render, session_codec};

/// Generates a puzzle, starts a session, and saves it.
pub fn new_game(
    store: &mut impl SaveStore,
    player: &str,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<(), AppError> {
    let generator = PuzzleGenerator::new();
    let puzzle = match seed {
        Some(seed) => generator.generate_with_seed(difficulty, seed)?,
        None => generator.generate(difficulty)?,
    };
    log::info!("generated {difficulty} puzzle from seed {}", puzzle.seed);

    let session = Session::new(&puzzle, player);
    store.append(&session_codec::to_record(&session))?;

    println!("New {difficulty} game for {player} (seed {})", puzzle.seed);
    print_session(&session);
    Ok(())
}

/// Prints the latest saved board for a player.
pub fn show(store: &impl SaveStore, player: &str) -> Result<(), AppError> {
    let Some(session) = load_latest(store, player)? else {
        return Ok(());
    };
    print_session(&session);
    Ok(())
}

/// Enters a digit into a cell and saves. Out-of-range digits are ignored.
pub fn set(
    store: &mut impl SaveStore,
    player: &str,
    x: u8,
    y: u8,
    digit: u8,
) -> Result<(), AppError> {
    let Some(mut session) = load_latest(store, player)? else {
        return Ok(());
    };
    session.select_cell(parse_position(x, y)?)?;
    session.input_digit(digit)?;
    finish_mutation(store, &session)
}

/// Clears a cell and saves.
pub fn clear(store: &mut impl SaveStore, player: &str, x: u8, y: u8) -> Result<(), AppError> {
    let Some(mut session) = load_latest(store, player)? else {
        return Ok(());
    };
    session.select_cell(parse_position(x, y)?)?;
    session.clear_selected()?;
    finish_mutation(store, &session)
}

/// Reveals one cell with a hint and saves.
pub fn hint(store: &mut impl SaveStore, player: &str) -> Result<(), AppError> {
    let Some(mut session) = load_latest(store, player)? else {
        return Ok(());
    };
    match session.request_hint() {
        Some(pos) => println!("Hint revealed cell {pos}"),
        None => println!("No hint available (budget exhausted or board full)"),
    }
    finish_mutation(store, &session)
}

fn load_latest(store: &impl SaveStore, player: &str) -> Result<Option<Session>, AppError> {
    match store.latest(player)? {
        Some(record) => Ok(Some(session_codec::from_record(&record)?)),
        None => {
            println!("No save available for {player}");
            Ok(None)
        }
    }
}

fn finish_mutation(store: &mut impl SaveStore, session: &Session) -> Result<(), AppError> {
    store.append(&session_codec::to_record(session))?;
    print_session(session);
    if session.is_won() {
        let secs = session.elapsed().as_secs();
        println!(
            "Congratulations! Solved in {}:{:02}",
            secs / 60,
            secs % 60
        );
    }
    Ok(())
}

fn print_session(session: &Session) {
    print!("{}", render::board(session.game()));
    println!("{}", render::status(session));
}

fn parse_position(x: u8, y: u8) -> Result<Position, AppError> {
    if x > 8 || y > 8 {
        return Err(AppError::CellOutOfRange { x, y });
    }
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use ninefold_store::MemoryStore;

    use super::*;

    #[test]
    fn test_new_then_set_then_hint_round_trip() {
        let mut store = MemoryStore::new();
        new_game(&mut store, "Ann", Difficulty::Easy, Some(42)).unwrap();

        let record = store.latest("Ann").unwrap().unwrap();
        assert_eq!(record.board.matches('.').count(), 30);
        assert_eq!(record.hint_count, 3);

        let session = session_codec::from_record(&record).unwrap();
        let empty = Position::ALL
            .into_iter()
            .find(|&pos| session.game().cell(pos).is_empty())
            .unwrap();
        set(&mut store, "Ann", empty.x(), empty.y(), 5).unwrap();

        hint(&mut store, "Ann").unwrap();
        let record = store.latest("Ann").unwrap().unwrap();
        assert_eq!(record.hint_count, 2);
    }

    #[test]
    fn test_commands_without_save_leave_store_untouched() {
        let mut store = MemoryStore::new();
        show(&store, "Ann").unwrap();
        set(&mut store, "Ann", 0, 0, 5).unwrap();
        hint(&mut store, "Ann").unwrap();
        assert_eq!(store.latest("Ann").unwrap(), None);
    }

    #[test]
    fn test_set_rejects_out_of_range_cell() {
        let mut store = MemoryStore::new();
        new_game(&mut store, "Ann", Difficulty::Easy, Some(1)).unwrap();
        assert!(matches!(
            set(&mut store, "Ann", 9, 0, 5),
            Err(AppError::CellOutOfRange { x: 9, y: 0 })
        ));
    }
}
