//! # TileKit
//!
//! Tile pattern visualizer and flooring material estimator.
//!
//! ## Architecture
//!
//! TileKit is organized as a workspace with multiple crates:
//!
//! 1. **tilekit-core** - Design model, unit helpers, material estimator
//! 2. **tilekit-settings** - Application config and design-record persistence
//! 3. **tilekit-designer** - Viewport, pattern layouts, renderer, export, visualizer state
//! 4. **tilekit** - This crate: re-exports, logging setup and the `tilekit` CLI
//!
//! ## Features
//!
//! - **Six Patterns**: straight, brick, herringbone, diagonal, basketweave, vertical
//! - **Material Estimates**: tiles with waste, boxes, grout bags, thinset, costs
//! - **Pan/Zoom Preview**: tiny-skia rendering with dimension labels
//! - **Save/Load**: single JSON design record on disk
//! - **Export**: watermarked PNG snapshots

pub mod cli;

pub use tilekit_designer as designer;
pub use tilekit_settings as settings;

pub use tilekit_core::{
    estimate, DerivedQuantities, DesignError, DesignState, GroutSpec, GroutWidth, Pattern, Rgb,
    RoomSpec, TileSpec,
};
pub use tilekit_designer::{
    DesignStatus, ExportError, NoticeBoard, NoticeLevel, Scene, Snapshot, TileVisualizer, Viewport,
};
pub use tilekit_settings::{Config, DesignPersistence, FileStorage, MemoryStorage, RecordStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
