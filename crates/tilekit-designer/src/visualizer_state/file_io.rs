//! Save, load, export and reset for the visualizer.
//!
//! Failures never escape as errors: each operation reports exactly one
//! notice and leaves the design untouched when it fails.

use super::{DesignStatus, TileVisualizer};
use crate::export::{ExportError, Snapshot};
use crate::notifications::NoticeLevel;
use chrono::Utc;
use std::path::PathBuf;
use tilekit_core::DesignState;
use tilekit_settings::{PersistenceError, RecordStorage};

/// Prompt shown before resetting.
pub const RESET_PROMPT: &str = "Reset all settings to default?";

impl<S: RecordStorage> TileVisualizer<S> {
    /// Saves the whole design with a fresh timestamp.
    pub fn save(&mut self) -> bool {
        let mut snapshot = self.design.clone();
        snapshot.timestamp = Utc::now();

        match self.persistence.save(&snapshot) {
            Ok(()) => {
                self.design = snapshot;
                self.status = DesignStatus::Clean;
                self.notices
                    .post(NoticeLevel::Success, "Design saved successfully!");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save design");
                self.notices
                    .post(NoticeLevel::Error, format!("Error saving design: {}", e));
                false
            }
        }
    }

    /// Replaces the design with the stored one.
    pub fn load(&mut self) -> bool {
        match self.persistence.load() {
            Ok(design) => {
                self.design = design;
                self.status = DesignStatus::Clean;
                self.refresh();
                self.notices
                    .post(NoticeLevel::Success, "Design loaded successfully!");
                true
            }
            Err(PersistenceError::NotFound(key)) => {
                tracing::warn!(key = %key, "No saved design found");
                self.notices
                    .post(NoticeLevel::Warning, "No saved design found");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load design");
                self.notices.post(NoticeLevel::Error, "Error loading design");
                false
            }
        }
    }

    /// Renders the current view and writes it as a PNG into the export
    /// directory. Returns the written path.
    pub fn export_snapshot(&mut self) -> Option<PathBuf> {
        match self.write_snapshot() {
            Ok(path) => {
                self.notices.post(NoticeLevel::Success, "Image exported!");
                Some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to export image");
                self.notices
                    .post(NoticeLevel::Error, format!("Error exporting image: {}", e));
                None
            }
        }
    }

    fn write_snapshot(&mut self) -> Result<PathBuf, ExportError> {
        let (width, height) = (self.scene.canvas_width, self.scene.canvas_height);
        let rendered = self
            .render()
            .ok_or(ExportError::EmptyCanvas { width, height })?;
        let snapshot = Snapshot::capture(&rendered, &self.watermark, &self.file_prefix, Utc::now())?;
        snapshot.write_png(&self.export_dir)
    }

    /// Restores the default design and view once `confirm` agrees.
    ///
    /// `confirm` receives [`RESET_PROMPT`]. Declining changes nothing.
    pub fn reset(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(RESET_PROMPT) {
            tracing::debug!("Reset declined");
            return false;
        }

        self.design = DesignState::default();
        self.viewport.reset();
        self.status = DesignStatus::Clean;
        self.refresh();
        self.notices.post(NoticeLevel::Info, "Reset complete");
        tracing::info!("Design reset to defaults");
        true
    }
}
