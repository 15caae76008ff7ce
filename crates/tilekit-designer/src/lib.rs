//! # TileKit Designer
//!
//! Turns a tile design into a picture of the floor. It fits the room into
//! the canvas, lays tiles out with one of six pattern strategies, rasterises
//! the scene with tiny-skia and exports watermarked PNG snapshots.
//!
//! ## Architecture
//!
//! ```text
//! TileVisualizer (state owner, control inputs, save/load/export/reset)
//!   ├── Viewport   (fit, pan, zoom)
//!   ├── Layout     (pattern strategy table -> tile placements)
//!   ├── Renderer   (scene planning, tiny-skia rasterisation, labels)
//!   ├── Export     (flatten, watermark, PNG)
//!   └── Notices    (transient feedback)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//! use tilekit_designer::TileVisualizer;
//! use tilekit_settings::{Config, MemoryStorage};
//!
//! let mut visualizer =
//!     TileVisualizer::new(MemoryStorage::new(), &Config::default(), SmallRng::seed_from_u64(0));
//! visualizer.set_pattern_input("herringbone");
//! println!("{}", visualizer.quantities());
//! ```

pub mod export;
pub mod font_manager;
pub mod layout;
pub mod notifications;
pub mod renderer;
pub mod viewport;
pub mod visualizer_state;

pub use export::{snapshot_file_name, ExportError, ExportResult, Snapshot};
pub use layout::{
    layout_for, LayoutFrame, LayoutInput, PatternLayout, PixelSize, TilePlacement, TileRotation,
    MAX_PLACEMENTS,
};
pub use notifications::{Notice, NoticeBoard, NoticeLevel};
pub use renderer::{pixmap_to_rgb, plan_scene, render_design, render_scene, Scene, TILE_JITTER};
pub use viewport::{RoomLayout, Viewport};
pub use visualizer_state::{DesignStatus, TileVisualizer, RESET_PROMPT};
