//! TileKit Settings Crate
//!
//! Handles application configuration and persistence of the design record.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{CanvasSettings, Config, ExportSettings, NoticeSettings, StorageSettings};
pub use error::{
    ConfigError, ConfigResult, PersistenceError, PersistenceResult, SettingsError, SettingsResult,
};
pub use persistence::{DesignPersistence, DesignRecord, FileStorage, MemoryStorage, RecordStorage};
