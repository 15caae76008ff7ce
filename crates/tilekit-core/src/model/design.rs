//! Room, tile, and the aggregate design record.

use super::color::Rgb;
use super::grout::GroutSpec;
use super::pattern::Pattern;
use crate::constants::*;
use crate::error::{DesignError, DesignResult};
use crate::units::square_inches_to_square_feet;
use chrono::{DateTime, Utc};

fn positive(field: &'static str, value: f64) -> DesignResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DesignError::InvalidDimension { field, value })
    }
}

/// Floor dimensions in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomSpec {
    width_ft: f64,
    length_ft: f64,
}

impl RoomSpec {
    /// Creates a room, rejecting non-positive or non-finite dimensions.
    pub fn new(width_ft: f64, length_ft: f64) -> DesignResult<Self> {
        Ok(Self {
            width_ft: positive("room width", width_ft)?,
            length_ft: positive("room length", length_ft)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width_ft
    }

    pub fn length(&self) -> f64 {
        self.length_ft
    }

    pub fn with_width(self, width_ft: f64) -> DesignResult<Self> {
        Self::new(width_ft, self.length_ft)
    }

    pub fn with_length(self, length_ft: f64) -> DesignResult<Self> {
        Self::new(self.width_ft, length_ft)
    }

    /// Floor area in square feet.
    pub fn area_sq_ft(&self) -> f64 {
        self.width_ft * self.length_ft
    }
}

impl Default for RoomSpec {
    fn default() -> Self {
        Self {
            width_ft: DEFAULT_ROOM_WIDTH_FT,
            length_ft: DEFAULT_ROOM_LENGTH_FT,
        }
    }
}

/// Tile face dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSpec {
    width_in: f64,
    height_in: f64,
}

impl TileSpec {
    /// Creates a tile size, rejecting non-positive or non-finite dimensions.
    pub fn new(width_in: f64, height_in: f64) -> DesignResult<Self> {
        Ok(Self {
            width_in: positive("tile width", width_in)?,
            height_in: positive("tile height", height_in)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width_in
    }

    pub fn height(&self) -> f64 {
        self.height_in
    }

    /// Face area of a single tile in square feet.
    pub fn area_sq_ft(&self) -> f64 {
        square_inches_to_square_feet(self.width_in * self.height_in)
    }
}

impl Default for TileSpec {
    fn default() -> Self {
        Self {
            width_in: DEFAULT_TILE_WIDTH_IN,
            height_in: DEFAULT_TILE_HEIGHT_IN,
        }
    }
}

/// A named tile size offered as a one-click choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePreset {
    pub name: &'static str,
    pub width_in: f64,
    pub height_in: f64,
}

impl TilePreset {
    pub fn spec(&self) -> TileSpec {
        TileSpec {
            width_in: self.width_in,
            height_in: self.height_in,
        }
    }
}

/// Common tile sizes; the first entry is the default selection.
pub const TILE_PRESETS: [TilePreset; 8] = [
    TilePreset { name: "12x12", width_in: 12.0, height_in: 12.0 },
    TilePreset { name: "3x6 subway", width_in: 3.0, height_in: 6.0 },
    TilePreset { name: "4x4", width_in: 4.0, height_in: 4.0 },
    TilePreset { name: "6x6", width_in: 6.0, height_in: 6.0 },
    TilePreset { name: "12x24", width_in: 12.0, height_in: 24.0 },
    TilePreset { name: "18x18", width_in: 18.0, height_in: 18.0 },
    TilePreset { name: "24x24", width_in: 24.0, height_in: 24.0 },
    TilePreset { name: "6x24 plank", width_in: 6.0, height_in: 24.0 },
];

/// Looks up a preset by name (case-insensitive).
pub fn find_preset(name: &str) -> Option<&'static TilePreset> {
    let name = name.trim();
    TILE_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// The complete set of inputs describing one visualizer configuration.
///
/// This is the unit of persistence: save and load always move the whole
/// record, never individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignState {
    pub room: RoomSpec,
    pub tile: TileSpec,
    pub grout: GroutSpec,
    pub tile_color: Rgb,
    pub pattern: Pattern,
    tile_price: f64,
    /// When the design was last saved (or created).
    pub timestamp: DateTime<Utc>,
}

impl DesignState {
    /// Documented defaults stamped with the given time.
    pub fn defaults_at(timestamp: DateTime<Utc>) -> Self {
        Self {
            room: RoomSpec::default(),
            tile: TileSpec::default(),
            grout: GroutSpec::default(),
            tile_color: Rgb::from_hex(DEFAULT_TILE_COLOR).unwrap_or(Rgb::new(0xF5, 0xF5, 0xDC)),
            pattern: Pattern::default(),
            tile_price: DEFAULT_TILE_PRICE,
            timestamp,
        }
    }

    /// Assembles a design from already-validated parts.
    pub fn from_parts(
        room: RoomSpec,
        tile: TileSpec,
        grout: GroutSpec,
        tile_color: Rgb,
        pattern: Pattern,
        tile_price: f64,
        timestamp: DateTime<Utc>,
    ) -> DesignResult<Self> {
        let mut state = Self::defaults_at(timestamp);
        state.room = room;
        state.tile = tile;
        state.grout = grout;
        state.tile_color = tile_color;
        state.pattern = pattern;
        state.set_tile_price(tile_price)?;
        Ok(state)
    }

    /// Price per unit of area.
    pub fn tile_price(&self) -> f64 {
        self.tile_price
    }

    /// Sets the unit price; it must be finite and not negative.
    pub fn set_tile_price(&mut self, price: f64) -> DesignResult<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(DesignError::InvalidPrice(price));
        }
        self.tile_price = price;
        Ok(())
    }

    /// True when every design field except the timestamp matches.
    pub fn same_design(&self, other: &DesignState) -> bool {
        self.room == other.room
            && self.tile == other.tile
            && self.grout == other.grout
            && self.tile_color == other.tile_color
            && self.pattern == other.pattern
            && self.tile_price == other.tile_price
    }
}

impl Default for DesignState {
    fn default() -> Self {
        Self::defaults_at(Utc::now())
    }
}
