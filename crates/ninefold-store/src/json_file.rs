use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{SaveRecord, SaveStore, StoreError};

type Histories = BTreeMap<String, Vec<SaveRecord>>;

/// A [`SaveStore`] backed by a single JSON file.
///
/// The file holds a map from player name to that player's ordered save
/// history; saving appends, never overwrites. A missing or unreadable file
/// reads as empty, so a corrupted file costs the old histories on the next
/// save rather than blocking play.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path. The file is created
    /// on first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the platform-conventional save file location
    /// (`<data dir>/ninefold/saves.json`), or `None` when no data
    /// directory can be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("ninefold").join("saves.json"))
    }

    /// Returns the path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_histories(&self) -> Histories {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return Histories::new();
        };
        match serde_json::from_str(&text) {
            Ok(histories) => histories,
            Err(error) => {
                log::warn!(
                    "save file {} is unreadable ({error}); treating as empty",
                    self.path.display()
                );
                Histories::new()
            }
        }
    }
}

impl SaveStore for JsonFileStore {
    fn append(&mut self, record: &SaveRecord) -> Result<(), StoreError> {
        let mut histories = self.read_histories();
        histories
            .entry(record.player.clone())
            .or_default()
            .push(record.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&histories)?;
        fs::write(&self.path, text)?;
        log::debug!(
            "appended save for {:?} to {}",
            record.player,
            self.path.display()
        );
        Ok(())
    }

    fn latest(&self, player: &str) -> Result<Option<SaveRecord>, StoreError> {
        Ok(self
            .read_histories()
            .remove(player)
            .and_then(|mut history| history.pop()))
    }
}
