//! Conversion between live [`Session`]s and persisted [`SaveRecord`]s.

use std::time::Duration;

use ninefold_core::{DigitGrid, Position};
use ninefold_game::{Game, Session};
use ninefold_store::SaveRecord;

use crate::error::AppError;

/// Snapshots a session into a save record, stamped with the current time.
pub fn to_record(session: &Session) -> SaveRecord {
    SaveRecord {
        board: session.game().board().to_string(),
        givens: Some(session.game().problem().to_string()),
        solution: session.game().solution().to_string(),
        difficulty: session.difficulty(),
        player: session.player().to_owned(),
        elapsed_secs: session.elapsed().as_secs(),
        hint_count: session.hint_count(),
        timestamp: SaveRecord::current_timestamp(),
    }
}

/// Rebuilds a session from a save record. The clock resumes from the saved
/// elapsed time.
pub fn from_record(record: &SaveRecord) -> Result<Session, AppError> {
    let problem: DigitGrid = record.givens().parse()?;
    let board: DigitGrid = record.board.parse()?;
    let solution: DigitGrid = record.solution.parse()?;

    // Player entries are the board cells not covered by a given.
    let mut filled = DigitGrid::new();
    for pos in Position::ALL {
        if problem.get(pos).is_none() {
            filled.set(pos, board.get(pos));
        }
    }

    let game = Game::from_parts(&problem, &solution, &filled)?;
    Ok(Session::resume(
        game,
        record.difficulty,
        record.player.clone(),
        Duration::from_secs(record.elapsed_secs),
        record.hint_count,
    ))
}
