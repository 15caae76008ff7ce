//! Pattern layout strategies.
//!
//! Each strategy turns room, tile and grout sizes (all in room pixels) into
//! the list of tile placements to draw. Placements always cover the room;
//! tiles crossing the far walls are kept whole and the room outline is the
//! only boundary marker.
//!
//! Loops are index based (`start + i * step`) so long rows do not drift.

use tilekit_core::Pattern;

/// Upper bound on placements for a single layout.
pub const MAX_PLACEMENTS: usize = 200_000;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Inputs shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub room: PixelSize,
    pub tile: PixelSize,
    /// Grout joint width in pixels.
    pub grout: f64,
}

/// Tile orientation relative to its nominal width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileRotation {
    None,
    /// Turned 90°, so the nominal width runs vertically.
    Quarter,
}

/// One tile on the floor, axis aligned in the layout frame.
///
/// `width`/`height` are the drawn extents, already swapped for quarter-turned
/// tiles. `(x, y)` is the top-left corner of the grout backing; the tile face
/// sits inset by half a grout joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: TileRotation,
}

impl TilePlacement {
    fn upright(x: f64, y: f64, tile: PixelSize) -> Self {
        Self {
            x,
            y,
            width: tile.width,
            height: tile.height,
            rotation: TileRotation::None,
        }
    }

    fn turned(x: f64, y: f64, tile: PixelSize) -> Self {
        Self {
            x,
            y,
            width: tile.height,
            height: tile.width,
            rotation: TileRotation::Quarter,
        }
    }

    /// Grout backing rectangle `(x, y, w, h)`.
    pub fn footprint(&self, grout: f64) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width + grout, self.height + grout)
    }

    /// Visible tile face rectangle `(x, y, w, h)`.
    pub fn face(&self, grout: f64) -> (f64, f64, f64, f64) {
        (
            self.x + grout / 2.0,
            self.y + grout / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Coordinate frame the placements are expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutFrame {
    /// Room pixels directly.
    Room,
    /// Rotated by `degrees` about `(cx, cy)` in room pixels.
    RotatedAboutCenter { degrees: f64, cx: f64, cy: f64 },
}

/// Result of a layout strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternLayout {
    pub frame: LayoutFrame,
    pub placements: Vec<TilePlacement>,
    /// Set when [`MAX_PLACEMENTS`] cut the layout short.
    pub truncated: bool,
}

impl PatternLayout {
    fn new(frame: LayoutFrame) -> Self {
        Self {
            frame,
            placements: Vec::new(),
            truncated: false,
        }
    }

    /// Adds a placement; returns false once the ceiling is hit.
    fn push(&mut self, placement: TilePlacement) -> bool {
        if self.placements.len() >= MAX_PLACEMENTS {
            self.truncated = true;
            return false;
        }
        self.placements.push(placement);
        true
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

type LayoutFn = fn(&LayoutInput) -> PatternLayout;

/// Strategies indexed by [`Pattern::index`].
const STRATEGIES: [LayoutFn; Pattern::COUNT] = [
    layout_straight,
    layout_brick,
    layout_herringbone,
    layout_diagonal,
    layout_basketweave,
    layout_vertical,
];

/// Lays out tiles for the given pattern.
///
/// Degenerate sizes (non-positive or non-finite) produce an empty layout.
pub fn layout_for(pattern: Pattern, input: &LayoutInput) -> PatternLayout {
    if !is_drawable(input) {
        tracing::warn!(?pattern, ?input, "Skipping layout for degenerate sizes");
        return PatternLayout::new(LayoutFrame::Room);
    }

    let layout = STRATEGIES[pattern.index()](input);
    if layout.truncated {
        tracing::warn!(
            ?pattern,
            limit = MAX_PLACEMENTS,
            "Tile layout hit the placement limit"
        );
    }
    tracing::debug!(?pattern, tiles = layout.len(), "Laid out tiles");
    layout
}

fn is_drawable(input: &LayoutInput) -> bool {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    positive(input.room.width)
        && positive(input.room.height)
        && positive(input.tile.width)
        && positive(input.tile.height)
        && input.grout.is_finite()
        && input.grout >= 0.0
}

/// Number of steps `start + i * step` that stay below `limit`.
fn steps(start: f64, limit: f64, step: f64) -> usize {
    if limit <= start {
        return 0;
    }
    ((limit - start) / step).ceil() as usize
}

/// Plain grid from the room origin.
fn layout_straight(input: &LayoutInput) -> PatternLayout {
    let LayoutInput { room, tile, grout } = *input;
    let step_x = tile.width + grout;
    let step_y = tile.height + grout;
    let mut layout = PatternLayout::new(LayoutFrame::Room);

    'rows: for row in 0..steps(0.0, room.height, step_y) {
        let y = row as f64 * step_y;
        for col in 0..steps(0.0, room.width, step_x) {
            if !layout.push(TilePlacement::upright(col as f64 * step_x, y, tile)) {
                break 'rows;
            }
        }
    }
    layout
}

/// Running bond: odd rows shift left by half a tile.
fn layout_brick(input: &LayoutInput) -> PatternLayout {
    let LayoutInput { room, tile, grout } = *input;
    let step_x = tile.width + grout;
    let step_y = tile.height + grout;
    let mut layout = PatternLayout::new(LayoutFrame::Room);

    'rows: for row in 0..steps(0.0, room.height, step_y) {
        let y = row as f64 * step_y;
        let start_x = if row % 2 == 1 { -tile.width / 2.0 } else { 0.0 };
        for col in 0..steps(start_x, room.width, step_x) {
            let x = start_x + col as f64 * step_x;
            // Partially visible tiles on the left wall still count.
            if x + tile.width <= 0.0 {
                continue;
            }
            if !layout.push(TilePlacement::upright(x, y, tile)) {
                break 'rows;
            }
        }
    }
    layout
}

/// Simplified herringbone: a flat tile with a turned tile on its right,
/// repeated on a doubled grid.
///
/// The grid widens for tiles taller than they are wide, and grows taller
/// when a turned tile outruns two flat rows, so units never overlap.
fn layout_herringbone(input: &LayoutInput) -> PatternLayout {
    let LayoutInput { room, tile, grout } = *input;
    let step_x = tile.width + grout + tile.width.max(tile.height) + grout;
    let step_y = (2.0 * (tile.height + grout)).max(tile.width + grout);
    let mut layout = PatternLayout::new(LayoutFrame::Room);

    'rows: for row in 0..steps(0.0, room.height, step_y) {
        let y = row as f64 * step_y;
        for col in 0..steps(0.0, room.width, step_x) {
            let x = col as f64 * step_x;
            if !layout.push(TilePlacement::upright(x, y, tile))
                || !layout.push(TilePlacement::turned(x + tile.width + grout, y, tile))
            {
                break 'rows;
            }
        }
    }
    layout
}

/// Straight grid rotated 45° about the room center.
///
/// The grid covers a square as wide as the room diagonal so the rotated
/// tiles reach every corner. Nothing is clipped.
fn layout_diagonal(input: &LayoutInput) -> PatternLayout {
    let LayoutInput { room, tile, grout } = *input;
    let cx = room.width / 2.0;
    let cy = room.height / 2.0;
    let half = room.width.hypot(room.height) / 2.0;
    let step_x = tile.width + grout;
    let step_y = tile.height + grout;
    let mut layout = PatternLayout::new(LayoutFrame::RotatedAboutCenter {
        degrees: 45.0,
        cx,
        cy,
    });

    let (x0, y0) = (cx - half, cy - half);
    'rows: for row in 0..steps(y0, cy + half, step_y) {
        let y = y0 + row as f64 * step_y;
        for col in 0..steps(x0, cx + half, step_x) {
            if !layout.push(TilePlacement::upright(x0 + col as f64 * step_x, y, tile)) {
                break 'rows;
            }
        }
    }
    layout
}

/// 2x2 units: two flat tiles stacked on the left, two turned tiles stacked
/// on their right.
fn layout_basketweave(input: &LayoutInput) -> PatternLayout {
    let LayoutInput { room, tile, grout } = *input;
    let step = 2.0 * (tile.width.max(tile.height) + grout);
    let mut layout = PatternLayout::new(LayoutFrame::Room);

    'rows: for row in 0..steps(0.0, room.height, step) {
        let y = row as f64 * step;
        for col in 0..steps(0.0, room.width, step) {
            let x = col as f64 * step;
            let right = x + tile.width + grout;
            let unit = [
                TilePlacement::upright(x, y, tile),
                TilePlacement::upright(x, y + tile.height + grout, tile),
                TilePlacement::turned(right, y, tile),
                TilePlacement::turned(right, y + tile.width + grout, tile),
            ];
            for placement in unit {
                if !layout.push(placement) {
                    break 'rows;
                }
            }
        }
    }
    layout
}

/// Every tile turned 90°, laid column by column.
fn layout_vertical(input: &LayoutInput) -> PatternLayout {
    let LayoutInput { room, tile, grout } = *input;
    let step_x = tile.height + grout;
    let step_y = tile.width + grout;
    let mut layout = PatternLayout::new(LayoutFrame::Room);

    'cols: for col in 0..steps(0.0, room.width, step_x) {
        let x = col as f64 * step_x;
        for row in 0..steps(0.0, room.height, step_y) {
            if !layout.push(TilePlacement::turned(x, row as f64 * step_y, tile)) {
                break 'cols;
            }
        }
    }
    layout
}
