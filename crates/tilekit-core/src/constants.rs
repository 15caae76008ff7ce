//! Shared defaults and limits.

/// Default room width in feet.
pub const DEFAULT_ROOM_WIDTH_FT: f64 = 8.0;
/// Default room length in feet.
pub const DEFAULT_ROOM_LENGTH_FT: f64 = 10.0;

/// Default tile width in inches.
pub const DEFAULT_TILE_WIDTH_IN: f64 = 12.0;
/// Default tile height in inches.
pub const DEFAULT_TILE_HEIGHT_IN: f64 = 12.0;

/// Default tile price per unit of area.
pub const DEFAULT_TILE_PRICE: f64 = 5.0;

/// Default tile color (beige).
pub const DEFAULT_TILE_COLOR: &str = "#F5F5DC";
/// Default grout color (light gray).
pub const DEFAULT_GROUT_COLOR: &str = "#CCCCCC";

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.5;
/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 3.0;
/// Multiplier applied by a single zoom in/out step.
pub const ZOOM_STEP: f64 = 1.2;

/// Pixels reserved around the room when fitting it to the canvas
/// (split evenly between both sides).
pub const CANVAS_MARGIN: f64 = 100.0;
