//! Tile visualizer state manager.
//!
//! `TileVisualizer` owns the design, the view, and everything derived from
//! them. Every control goes through the same pipeline: update the design or
//! view, then [`TileVisualizer::refresh`] recomputes the quantities and the
//! scene in full.
//!
//! Submodules:
//! - `controls`: input setters, zoom and pan
//! - `file_io`: save, load, export and reset

mod controls;
mod file_io;

pub use file_io::RESET_PROMPT;

use crate::notifications::NoticeBoard;
use crate::renderer::{plan_scene, render_scene, Scene};
use crate::viewport::Viewport;
use rand::rngs::SmallRng;
use std::path::PathBuf;
use std::time::Duration;
use tilekit_core::{DerivedQuantities, DesignState};
use tilekit_settings::{Config, DesignPersistence, RecordStorage};
use tiny_skia::Pixmap;

/// Whether the design differs from the last save/load/reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignStatus {
    Clean,
    Dirty,
}

/// The visualizer component.
pub struct TileVisualizer<S: RecordStorage> {
    design: DesignState,
    viewport: Viewport,
    quantities: DerivedQuantities,
    scene: Scene,
    status: DesignStatus,
    notices: NoticeBoard,
    persistence: DesignPersistence<S>,
    export_dir: PathBuf,
    watermark: String,
    file_prefix: String,
    rng: SmallRng,
    redraws: u64,
}

impl<S: RecordStorage> TileVisualizer<S> {
    /// Builds the visualizer, starting from the stored design when one loads
    /// cleanly and from the defaults otherwise.
    pub fn new(storage: S, config: &Config, rng: SmallRng) -> Self {
        let persistence = DesignPersistence::new(storage, config.storage.record_name.clone());
        let design = match persistence.load() {
            Ok(design) => design,
            Err(e) => {
                tracing::debug!(error = %e, "Starting from default design");
                DesignState::default()
            }
        };
        let viewport = Viewport::with_margin(
            config.canvas.width as f64,
            config.canvas.height as f64,
            config.canvas.margin,
        );

        let quantities = DerivedQuantities::for_design(&design);
        let scene = plan_scene(&design, &viewport);
        Self {
            design,
            viewport,
            quantities,
            scene,
            status: DesignStatus::Clean,
            notices: NoticeBoard::new(Duration::from_millis(config.notices.duration_ms)),
            persistence,
            export_dir: config.export.directory.clone(),
            watermark: config.export.watermark_text.clone(),
            file_prefix: config.export.file_prefix.clone(),
            rng,
            redraws: 1,
        }
    }

    pub fn design(&self) -> &DesignState {
        &self.design
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn quantities(&self) -> &DerivedQuantities {
        &self.quantities
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn status(&self) -> DesignStatus {
        self.status
    }

    pub fn is_modified(&self) -> bool {
        self.status == DesignStatus::Dirty
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    pub fn export_dir(&self) -> &std::path::Path {
        &self.export_dir
    }

    pub fn set_export_dir(&mut self, directory: impl Into<PathBuf>) {
        self.export_dir = directory.into();
    }

    /// Number of full recomputes so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Recomputes quantities and the scene from the current design and view.
    pub fn refresh(&mut self) {
        self.quantities = DerivedQuantities::for_design(&self.design);
        self.scene = plan_scene(&self.design, &self.viewport);
        self.notices.prune();
        self.redraws += 1;
        tracing::debug!(
            pattern = %self.design.pattern,
            tiles = self.scene.layout.len(),
            view = %self.viewport,
            "Refreshed visualizer"
        );
    }

    /// Rasterises the current scene.
    pub fn render(&mut self) -> Option<Pixmap> {
        render_scene(&self.scene, &mut self.rng)
    }

    /// Applies a design edit, marking the design dirty if anything changed.
    fn edit(&mut self, change: impl FnOnce(&mut DesignState)) {
        let before = self.design.clone();
        change(&mut self.design);
        if !self.design.same_design(&before) {
            self.status = DesignStatus::Dirty;
        }
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use tilekit_settings::MemoryStorage;

    #[test]
    fn test_new_starts_clean_with_defaults() {
        let visualizer =
            TileVisualizer::new(MemoryStorage::new(), &Config::default(), SmallRng::seed_from_u64(1));
        assert_eq!(visualizer.status(), DesignStatus::Clean);
        assert!(visualizer.design().same_design(&DesignState::default()));
        assert_eq!(visualizer.quantities().tiles_needed, 80);
        assert_eq!(visualizer.scene().layout.len(), 80);
        assert!(visualizer.notices().is_empty());
    }

    #[test]
    fn test_render_matches_canvas() {
        let mut config = Config::default();
        config.canvas.width = 320;
        config.canvas.height = 240;
        config.canvas.margin = 40.0;
        let mut visualizer =
            TileVisualizer::new(MemoryStorage::new(), &config, SmallRng::seed_from_u64(1));
        let pixmap = visualizer.render().unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (320, 240));
    }
}
