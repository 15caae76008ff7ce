//! Design Persistence
//!
//! Stores the current design as a single named record, last write wins.
//! The record is camelCase JSON so it matches what the web visualizer keeps
//! in local storage:
//!
//! ```text
//! { roomWidth, roomLength, tileWidth, tileHeight, groutWidth,
//!   groutColor, tileColor, pattern, tilePrice, timestamp }
//! ```
//!
//! Storage itself sits behind [`RecordStorage`] so the visualizer can run
//! against the file system or an in-memory map.

use crate::error::{PersistenceError, PersistenceResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tilekit_core::constants::DEFAULT_TILE_PRICE;
use tilekit_core::{DesignState, GroutSpec, GroutWidth, Pattern, Rgb, RoomSpec, TileSpec};

/// Key-value storage for serialized records.
pub trait RecordStorage {
    /// Returns the stored text, or `None` when nothing was saved under `key`.
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

impl RecordStorage for FileStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        std::fs::create_dir_all(&self.directory)?;
        let target = self.path_for(key);
        let temp = self.directory.join(format!(".{}.json.tmp", key));

        // Write beside the target and rename so a failed write never leaves
        // a truncated record behind.
        let result = std::fs::File::create(&temp)
            .and_then(|mut file| {
                file.write_all(value.as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| std::fs::rename(&temp, &target));
        if let Err(e) = result {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// Volatile storage, used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStorage for MemoryStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn default_tile_price() -> f64 {
    DEFAULT_TILE_PRICE
}

/// Wire form of a saved design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    pub room_width: f64,
    pub room_length: f64,
    pub tile_width: f64,
    pub tile_height: f64,
    pub grout_width: f64,
    pub grout_color: String,
    pub tile_color: String,
    pub pattern: String,
    /// Absent means the default price; an explicit 0 stays 0.
    #[serde(default = "default_tile_price")]
    pub tile_price: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<&DesignState> for DesignRecord {
    fn from(state: &DesignState) -> Self {
        Self {
            room_width: state.room.width(),
            room_length: state.room.length(),
            tile_width: state.tile.width(),
            tile_height: state.tile.height(),
            grout_width: state.grout.width.inches(),
            grout_color: state.grout.color.to_string(),
            tile_color: state.tile_color.to_string(),
            pattern: state.pattern.name().to_string(),
            tile_price: state.tile_price(),
            timestamp: state.timestamp,
        }
    }
}

impl TryFrom<DesignRecord> for DesignState {
    type Error = PersistenceError;

    fn try_from(record: DesignRecord) -> Result<Self, Self::Error> {
        let grout = GroutSpec {
            width: GroutWidth::try_from(record.grout_width)?,
            color: record.grout_color.parse::<Rgb>()?,
        };
        Ok(DesignState::from_parts(
            RoomSpec::new(record.room_width, record.room_length)?,
            TileSpec::new(record.tile_width, record.tile_height)?,
            grout,
            record.tile_color.parse::<Rgb>()?,
            record.pattern.parse::<Pattern>()?,
            record.tile_price,
            record.timestamp,
        )?)
    }
}

/// Saves and loads the design record through a [`RecordStorage`].
#[derive(Debug, Clone)]
pub struct DesignPersistence<S: RecordStorage> {
    storage: S,
    key: String,
}

impl<S: RecordStorage> DesignPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Serializes the whole design, overwriting any previous record.
    pub fn save(&mut self, state: &DesignState) -> PersistenceResult<()> {
        let json = serde_json::to_string_pretty(&DesignRecord::from(state))?;
        self.storage.set(&self.key, &json)?;
        tracing::info!(key = %self.key, pattern = %state.pattern, "Saved design record");
        Ok(())
    }

    /// Reads and validates the stored design.
    ///
    /// Fails with [`PersistenceError::NotFound`] when nothing was saved and
    /// [`PersistenceError::Malformed`]/[`PersistenceError::Invalid`] when the
    /// stored text cannot be turned back into a valid design.
    pub fn load(&self) -> PersistenceResult<DesignState> {
        let text = self
            .storage
            .get(&self.key)?
            .ok_or_else(|| PersistenceError::NotFound(self.key.clone()))?;
        let record: DesignRecord = serde_json::from_str(&text)
            .map_err(|e| PersistenceError::Malformed(e.to_string()))?;
        let state = DesignState::try_from(record)?;
        tracing::info!(key = %self.key, pattern = %state.pattern, "Loaded design record");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persistence() -> DesignPersistence<MemoryStorage> {
        DesignPersistence::new(MemoryStorage::new(), "tileDesign")
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let state = DesignState::default();
        let json = serde_json::to_value(DesignRecord::from(&state)).unwrap();
        for key in [
            "roomWidth",
            "roomLength",
            "tileWidth",
            "tileHeight",
            "groutWidth",
            "groutColor",
            "tileColor",
            "pattern",
            "tilePrice",
            "timestamp",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["pattern"], "straight");
        assert_eq!(json["groutWidth"], 0.125);
        assert_eq!(json["tileColor"], "#F5F5DC");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut state = DesignState::default();
        state.room = RoomSpec::new(11.5, 9.25).unwrap();
        state.tile = TileSpec::new(3.0, 6.0).unwrap();
        state.grout.width = GroutWidth::from_sixteenths(3).unwrap();
        state.pattern = Pattern::Herringbone;
        state.set_tile_price(7.35).unwrap();

        let mut p = persistence();
        p.save(&state).unwrap();
        assert_eq!(p.load().unwrap(), state);
    }

    #[test]
    fn test_missing_record() {
        assert!(matches!(
            persistence().load(),
            Err(PersistenceError::NotFound(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let mut p = persistence();
        p.storage_mut().set("tileDesign", "{ not json").unwrap();
        assert!(matches!(p.load(), Err(PersistenceError::Malformed(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut p = persistence();
        let mut record = DesignRecord::from(&DesignState::default());
        record.pattern = "chevron".to_string();
        p.storage_mut()
            .set("tileDesign", &serde_json::to_string(&record).unwrap())
            .unwrap();
        assert!(matches!(p.load(), Err(PersistenceError::Invalid(_))));

        record.pattern = "brick".to_string();
        record.room_width = -3.0;
        p.storage_mut()
            .set("tileDesign", &serde_json::to_string(&record).unwrap())
            .unwrap();
        assert!(matches!(p.load(), Err(PersistenceError::Invalid(_))));
    }

    #[test]
    fn test_missing_price_defaults_to_five() {
        let mut p = persistence();
        let json = r##"{
            "roomWidth": 8, "roomLength": 10, "tileWidth": 12, "tileHeight": 12,
            "groutWidth": 0.25, "groutColor": "#CCCCCC", "tileColor": "#FFFFFF",
            "pattern": "diagonal", "timestamp": "2024-05-01T12:00:00Z"
        }"##;
        p.storage_mut().set("tileDesign", json).unwrap();
        let state = p.load().unwrap();
        assert_eq!(state.tile_price(), 5.0);
        assert_eq!(state.pattern, Pattern::Diagonal);
        assert_eq!(state.grout.width.sixteenths(), 4);
    }

    #[test]
    fn test_stored_zero_price_is_kept() {
        let mut state = DesignState::default();
        state.set_tile_price(0.0).unwrap();

        let mut p = persistence();
        p.save(&state).unwrap();
        assert_eq!(p.load().unwrap().tile_price(), 0.0);
    }
}
