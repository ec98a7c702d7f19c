use std::collections::HashMap;

use crate::SaveRecord;

/// Errors from writing save data.
///
/// Read-side problems (missing file, unparsable content, unknown player)
/// are not errors; they mean "no save available" and surface as `Ok(None)`.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    /// Reading or writing the save file failed.
    #[display("save file I/O failed: {_0}")]
    Io(std::io::Error),
    /// Encoding save data to JSON failed.
    #[display("encoding save data failed: {_0}")]
    Encode(serde_json::Error),
}

/// Append-only persistence of per-player save histories.
pub trait SaveStore {
    /// Appends a record to the history of `record.player`. Existing records
    /// are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record cannot be persisted.
    fn append(&mut self, record: &SaveRecord) -> Result<(), StoreError>;

    /// Returns the most recently appended record for the given player, or
    /// `None` when the player has no saves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only for write-side failures in stores that
    /// need them; unreadable or missing data is `Ok(None)`.
    fn latest(&self, player: &str) -> Result<Option<SaveRecord>, StoreError>;
}

/// An in-memory save store, used by tests and as the simplest
/// [`SaveStore`] implementation.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    histories: HashMap<String, Vec<SaveRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn append(&mut self, record: &SaveRecord) -> Result<(), StoreError> {
        self.histories
            .entry(record.player.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    fn latest(&self, player: &str) -> Result<Option<SaveRecord>, StoreError> {
        Ok(self
            .histories
            .get(player)
            .and_then(|history| history.last())
            .cloned())
    }
}
