//! Material quantity and cost estimation.
//!
//! Every quantity is derived from room and tile geometry plus the unit price;
//! the layout pattern never enters the calculation. Physical quantities
//! (tiles, boxes, bags, pounds) always round up so an order is never short.
//! Costs are left unrounded.

use crate::model::{DesignState, RoomSpec, TileSpec};
use crate::units::{format_currency, square_inches_to_square_feet};
use std::fmt;

/// Extra tiles ordered for cuts and breakage, in percent.
pub const WASTE_PERCENT: u64 = 10;
/// Square feet of tile in one box.
pub const BOX_COVERAGE_SQ_FT: f64 = 10.0;
/// Pounds of thinset per square foot of floor.
pub const THINSET_LBS_PER_SQ_FT: f64 = 1.5;
/// Square feet covered by one bag of grout.
pub const GROUT_BAG_COVERAGE_SQ_FT: f64 = 150.0;
/// Price of one bag of grout.
pub const GROUT_BAG_PRICE: f64 = 25.0;
/// Pounds of thinset in one bag.
pub const THINSET_BAG_LBS: f64 = 50.0;
/// Price of one bag of thinset.
pub const THINSET_BAG_PRICE: f64 = 30.0;

/// Fractional part at or below which a value is treated as already whole.
///
/// `80.0 * 1.1` evaluates to `88.00000000000001`; without this the ceiling
/// would order a tile nobody needs. The slack is absolute so a real fraction
/// on a large count still rounds up.
const CEIL_EPSILON: f64 = 1e-9;

/// Rounds up to a whole count, ignoring floating-point noise just above an integer.
///
/// Counts beyond `u64::MAX` (including infinity) saturate.
fn ceil_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // u64::MAX as f64 rounds up to 2^64, the first value that does not fit.
    if value >= u64::MAX as f64 {
        return u64::MAX;
    }
    let floor = value.floor();
    let whole = if value - floor <= CEIL_EPSILON {
        floor
    } else {
        value.ceil()
    };
    if whole >= u64::MAX as f64 {
        u64::MAX
    } else {
        whole as u64
    }
}

/// Adds the waste allowance, rounding up and saturating at `u64::MAX`.
fn with_waste(tiles: u64) -> u64 {
    let padded = (u128::from(tiles) * u128::from(100 + WASTE_PERCENT)).div_ceil(100);
    u64::try_from(padded).unwrap_or(u64::MAX)
}

/// Material quantities and costs for one design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// Floor area in square feet
    pub room_area_sq_ft: f64,
    /// Face area of one tile in square feet
    pub tile_area_sq_ft: f64,
    pub tiles_needed: u64,
    /// Tiled area over room area, in percent
    pub coverage_percent: f64,
    pub tiles_with_waste: u64,
    pub boxes_needed: u64,
    pub grout_bags_needed: u64,
    pub thinset_lbs: u64,
    pub thinset_bags: u64,
    pub tile_cost: f64,
    pub grout_cost: f64,
    pub thinset_cost: f64,
    pub total_cost: f64,
}

impl DerivedQuantities {
    /// Estimates materials for the design's room, tile and price.
    pub fn for_design(design: &DesignState) -> Self {
        estimate(&design.room, &design.tile, design.tile_price())
    }

    /// Area the grout bags have to cover (the whole floor).
    pub fn grout_coverage_sq_ft(&self) -> f64 {
        self.room_area_sq_ft
    }
}

/// Computes the full set of derived quantities.
///
/// Pure and deterministic: the same inputs always produce the same output.
pub fn estimate(room: &RoomSpec, tile: &TileSpec, price_per_unit: f64) -> DerivedQuantities {
    let room_area = room.area_sq_ft();
    let tile_area = tile.area_sq_ft();

    // Dividing by the square-inch product keeps integer sizes exact.
    let tiles_needed = ceil_count(room_area * 144.0 / (tile.width() * tile.height()));
    let coverage_percent = tiles_needed as f64 * tile_area / room_area * 100.0;
    let tiles_with_waste = with_waste(tiles_needed);
    let boxes_needed = ceil_count(
        square_inches_to_square_feet(tiles_with_waste as f64 * tile.width() * tile.height())
            / BOX_COVERAGE_SQ_FT,
    );
    let thinset_lbs = ceil_count(room_area * THINSET_LBS_PER_SQ_FT);
    let grout_bags_needed = ceil_count(room_area / GROUT_BAG_COVERAGE_SQ_FT);
    let thinset_bags = ceil_count(thinset_lbs as f64 / THINSET_BAG_LBS);

    let waste_factor = 1.0 + WASTE_PERCENT as f64 / 100.0;
    let tile_cost = room_area * waste_factor * price_per_unit;
    let grout_cost = grout_bags_needed as f64 * GROUT_BAG_PRICE;
    let thinset_cost = thinset_bags as f64 * THINSET_BAG_PRICE;
    let total_cost = tile_cost + grout_cost + thinset_cost;

    tracing::debug!(
        room_area,
        tiles_needed,
        tiles_with_waste,
        boxes_needed,
        total_cost,
        "Recomputed material estimate"
    );

    DerivedQuantities {
        room_area_sq_ft: room_area,
        tile_area_sq_ft: tile_area,
        tiles_needed,
        coverage_percent,
        tiles_with_waste,
        boxes_needed,
        grout_bags_needed,
        thinset_lbs,
        thinset_bags,
        tile_cost,
        grout_cost,
        thinset_cost,
        total_cost,
    }
}

impl fmt::Display for DerivedQuantities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total area:        {:.1} sq ft", self.room_area_sq_ft)?;
        writeln!(f, "Tiles needed:      {}", self.tiles_needed)?;
        writeln!(f, "Coverage:          {:.1}%", self.coverage_percent)?;
        writeln!(f, "With 10% waste:    {}", self.tiles_with_waste)?;
        writeln!(f, "Boxes needed:      {}", self.boxes_needed)?;
        writeln!(f, "Grout coverage:    {:.1} sq ft", self.grout_coverage_sq_ft())?;
        writeln!(f, "Grout bags:        {}", self.grout_bags_needed)?;
        writeln!(f, "Thinset needed:    {} lbs", self.thinset_lbs)?;
        writeln!(f, "Tile cost:         {}", format_currency(self.tile_cost))?;
        writeln!(f, "Grout cost:        {}", format_currency(self.grout_cost))?;
        writeln!(f, "Thinset cost:      {}", format_currency(self.thinset_cost))?;
        write!(f, "Materials total:   {}", format_currency(self.total_cost))
    }
}
