//! Configuration and settings management for TileKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (drawing surface size and fit margin)
//! - Storage settings (where the design record lives)
//! - Export settings (snapshot directory, watermark, file prefix)
//! - Notice settings (how long notices stay visible)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tilekit_core::constants::CANVAS_MARGIN;

/// Application directory name under the platform config/data dirs.
const APP_DIR: &str = "tilekit";

/// Drawing surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pixels reserved around the room when fitting it to the canvas
    pub margin: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: CANVAS_MARGIN,
        }
    }
}

/// Design record storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding saved records
    pub directory: PathBuf,
    /// Name of the single design record
    pub record_name: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            directory: dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(".")),
            record_name: "tileDesign".to_string(),
        }
    }
}

/// Snapshot export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory exported images are written to
    pub directory: PathBuf,
    /// Text stamped in the bottom-right corner
    pub watermark_text: String,
    /// File name prefix, followed by a millisecond timestamp
    pub file_prefix: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            watermark_text: "Created with TileKit Visualizer".to_string(),
            file_prefix: "tile-design".to_string(),
        }
    }
}

/// Transient notice settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeSettings {
    /// How long a notice stays visible, in milliseconds
    pub duration_ms: u64,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub notices: NoticeSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config dir>/tilekit/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Self::format_of(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it is missing
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let out_of_range = |key: &str, value: String| ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value,
        };

        if self.canvas.width == 0 {
            return Err(out_of_range("canvas.width", self.canvas.width.to_string()));
        }
        if self.canvas.height == 0 {
            return Err(out_of_range("canvas.height", self.canvas.height.to_string()));
        }
        let smallest_side = self.canvas.width.min(self.canvas.height) as f64;
        if !self.canvas.margin.is_finite()
            || self.canvas.margin < 0.0
            || self.canvas.margin >= smallest_side
        {
            return Err(out_of_range("canvas.margin", self.canvas.margin.to_string()));
        }

        if self.storage.record_name.trim().is_empty()
            || self
                .storage
                .record_name
                .contains(|c: char| c == '/' || c == '\\')
        {
            return Err(out_of_range(
                "storage.record_name",
                self.storage.record_name.clone(),
            ));
        }

        if self.export.file_prefix.trim().is_empty() {
            return Err(out_of_range(
                "export.file_prefix",
                self.export.file_prefix.clone(),
            ));
        }

        if self.notices.duration_ms == 0 {
            return Err(out_of_range(
                "notices.duration_ms",
                self.notices.duration_ms.to_string(),
            ));
        }

        Ok(())
    }

    fn format_of(path: &Path) -> Result<ConfigFormat, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

enum ConfigFormat {
    Json,
    Toml,
}
