//! # TileKit Core
//!
//! Core types and pure calculations for the TileKit visualizer.
//! Provides the design data model, unit conversions, shared defaults,
//! and the material quantity estimator.

pub mod constants;
pub mod error;
pub mod estimator;
pub mod model;
pub mod units;

pub use error::{DesignError, DesignResult, Error, Result};
pub use estimator::{estimate, DerivedQuantities};
pub use model::{
    find_preset, DesignState, GroutSpec, GroutWidth, Pattern, Rgb, RoomSpec, TilePreset, TileSpec,
    SWATCHES, TILE_PRESETS,
};
