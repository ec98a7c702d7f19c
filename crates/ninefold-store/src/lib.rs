//! Save-game persistence for the Ninefold Sudoku game.
//!
//! Saves are append-only: each save appends a [`SaveRecord`] to the player's
//! history and loading retrieves the most recently appended record. Prior
//! saves are never overwritten.
//!
//! The [`SaveStore`] trait decouples session logic from the storage
//! mechanism; [`JsonFileStore`] persists to a single JSON file mapping
//! player names to record lists, and [`MemoryStore`] backs tests.
//!
//! A missing file, unreadable content, an unknown player name, or an empty
//! history are all "no save available" — they surface as `Ok(None)` from
//! [`SaveStore::latest`], never as errors.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::Difficulty;
//! use ninefold_store::{MemoryStore, SaveRecord, SaveStore};
//!
//! let mut store = MemoryStore::new();
//! assert_eq!(store.latest("Ann").unwrap(), None);
//!
//! let record = SaveRecord {
//!     board: ".".repeat(81),
//!     givens: None,
//!     solution: "9".repeat(81),
//!     difficulty: Difficulty::Easy,
//!     player: "Ann".to_owned(),
//!     elapsed_secs: 125,
//!     hint_count: 1,
//!     timestamp: SaveRecord::current_timestamp(),
//! };
//! store.append(&record).unwrap();
//! assert_eq!(store.latest("Ann").unwrap(), Some(record));
//! ```

mod json_file;
mod record;
mod store;

pub use self::{
    json_file::JsonFileStore,
    record::SaveRecord,
    store::{MemoryStore, SaveStore, StoreError},
};
