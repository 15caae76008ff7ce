//! Design data model: room, tile, grout, pattern, and the aggregate record.

pub mod color;
pub mod design;
pub mod grout;
pub mod pattern;

pub use color::{Rgb, SWATCHES};
pub use design::{find_preset, DesignState, RoomSpec, TilePreset, TileSpec, TILE_PRESETS};
pub use grout::{GroutSpec, GroutWidth};
pub use pattern::Pattern;
