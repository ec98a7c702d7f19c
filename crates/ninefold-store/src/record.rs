use std::time::{SystemTime, UNIX_EPOCH};

use ninefold_generator::Difficulty;
use serde::{Deserialize, Serialize};

fn default_hint_count() -> u32 {
    3
}

/// One saved snapshot of a play session.
///
/// Grids cross the persistence boundary as 81-character strings in
/// row-major order (`.` for empty). There is no schema versioning; fields
/// added after the first release carry serde defaults so older files still
/// load:
///
/// - `hint_count` defaults to 3 when absent.
/// - `givens` records which cells were clues. When absent, every non-empty
///   cell of `board` is treated as a given on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Current board: givens plus player entries.
    pub board: String,
    /// The clue pattern the game started from.
    #[serde(default)]
    pub givens: Option<String>,
    /// The generated solution.
    pub solution: String,
    /// Difficulty tier of the puzzle.
    pub difficulty: Difficulty,
    /// Player name the record is filed under.
    pub player: String,
    /// Elapsed play time in whole seconds at save time.
    pub elapsed_secs: u64,
    /// Hints remaining at save time.
    #[serde(default = "default_hint_count")]
    pub hint_count: u32,
    /// Unix timestamp (seconds) of the save.
    pub timestamp: u64,
}

impl SaveRecord {
    /// Returns the clue pattern, falling back to treating every non-empty
    /// cell of the board as a given for records saved without one.
    #[must_use]
    pub fn givens(&self) -> &str {
        self.givens.as_deref().unwrap_or(&self.board)
    }

    /// Returns the current unix timestamp in seconds, for stamping new
    /// records.
    #[must_use]
    pub fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SaveRecord {
        SaveRecord {
            board: format!("12{}", ".".repeat(79)),
            givens: Some(format!("1{}", ".".repeat(80))),
            solution: "9".repeat(81),
            difficulty: Difficulty::Easy,
            player: "Ann".to_owned(),
            elapsed_secs: 125,
            hint_count: 1,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_json_round_trip() {
        let record = record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_missing_hint_count_defaults_to_three() {
        let json = format!(
            concat!(
                "{{\"board\":\"{board}\",\"solution\":\"{solution}\",",
                "\"difficulty\":\"hard\",\"player\":\"Ann\",",
                "\"elapsed_secs\":10,\"timestamp\":0}}"
            ),
            board = ".".repeat(81),
            solution = "9".repeat(81),
        );
        let parsed: SaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.hint_count, 3);
        assert_eq!(parsed.givens, None);
    }

    #[test]
    fn test_givens_falls_back_to_board() {
        let mut record = record();
        assert_eq!(record.givens(), record.givens.clone().unwrap());
        record.givens = None;
        assert_eq!(record.givens(), record.board);
    }
}
