//! Viewport and room-to-screen transformation.
//!
//! The room is fitted into the canvas (minus a margin), centered, and then
//! the user's pan and zoom are applied on top:
//!
//! ```text
//! scale  = min((canvas_w - margin) / room_w, (canvas_h - margin) / room_l)
//! offset = ((canvas_w - room_w * scale) / 2, (canvas_h - room_l * scale) / 2)
//! screen = pan + zoom * (offset + room_px)
//! ```
//!
//! Screen space has (0,0) at the top-left with +Y pointing down, same as the
//! room's own pixel space.

use std::fmt;

use tilekit_core::constants::{CANVAS_MARGIN, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use tilekit_core::RoomSpec;

/// Where the room lands on the canvas before pan and zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomLayout {
    /// Pixels per foot.
    pub scale: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl RoomLayout {
    /// Converts a length in inches to room pixels.
    pub fn inches_to_px(&self, inches: f64) -> f64 {
        tilekit_core::units::inches_to_feet(inches) * self.scale
    }
}

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    margin: f64,
}

impl Viewport {
    /// Creates a viewport for a canvas of the given size with the default margin.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self::with_margin(canvas_width, canvas_height, CANVAS_MARGIN)
    }

    pub fn with_margin(canvas_width: f64, canvas_height: f64, margin: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
            margin,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Sets the canvas dimensions (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the allowed range.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Back to 100% with no pan.
    pub fn zoom_fit(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.pan_x = x;
            self.pan_y = y;
        }
    }

    /// Pans by a delta amount (drag).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.set_pan(self.pan_x + dx, self.pan_y + dy);
    }

    /// Fits the room into the canvas and centers it.
    pub fn room_layout(&self, room: &RoomSpec) -> RoomLayout {
        let available_width = (self.canvas_width - self.margin).max(1.0);
        let available_height = (self.canvas_height - self.margin).max(1.0);
        let scale = (available_width / room.width()).min(available_height / room.length());

        let width_px = room.width() * scale;
        let height_px = room.length() * scale;
        RoomLayout {
            scale,
            width_px,
            height_px,
            offset_x: (self.canvas_width - width_px) / 2.0,
            offset_y: (self.canvas_height - height_px) / 2.0,
        }
    }

    /// Maps a point in room pixels to screen pixels.
    pub fn room_to_pixel(&self, layout: &RoomLayout, x: f64, y: f64) -> (f64, f64) {
        (
            self.pan_x + self.zoom * (layout.offset_x + x),
            self.pan_y + self.zoom * (layout.offset_y + y),
        )
    }

    /// Maps a screen pixel back to room pixels.
    pub fn pixel_to_room(&self, layout: &RoomLayout, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.pan_x) / self.zoom - layout.offset_x,
            (y - self.pan_y) / self.zoom - layout.offset_y,
        )
    }

    /// Resets viewport to default state (1:1 zoom, no pan).
    pub fn reset(&mut self) {
        self.zoom_fit();
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut viewport = Viewport::default();
        viewport.zoom_in();
        assert!((viewport.zoom() - 1.2).abs() < 1e-12);

        for _ in 0..20 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom(), ZOOM_MAX);

        for _ in 0..40 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom(), ZOOM_MIN);
    }

    #[test]
    fn test_zoom_fit_restores_identity() {
        let mut viewport = Viewport::default();
        viewport.zoom_in();
        viewport.pan_by(35.0, -12.5);
        viewport.zoom_fit();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!((viewport.pan_x(), viewport.pan_y()), (0.0, 0.0));
    }

    #[test]
    fn test_set_zoom_ignores_nan() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(2.0);
        viewport.set_zoom(f64::NAN);
        assert_eq!(viewport.zoom(), 2.0);
    }

    #[test]
    fn test_default_room_layout() {
        // 800x600 canvas, 100 px margin: 700/8 = 87.5, 500/10 = 50 -> 50 px/ft
        let viewport = Viewport::default();
        let layout = viewport.room_layout(&RoomSpec::default());
        assert_eq!(layout.scale, 50.0);
        assert_eq!(layout.width_px, 400.0);
        assert_eq!(layout.height_px, 500.0);
        assert_eq!(layout.offset_x, 200.0);
        assert_eq!(layout.offset_y, 50.0);
        assert_eq!(layout.inches_to_px(12.0), 50.0);
    }

    #[test]
    fn test_room_to_pixel_applies_pan_then_zoom() {
        let mut viewport = Viewport::default();
        let layout = viewport.room_layout(&RoomSpec::default());
        assert_eq!(viewport.room_to_pixel(&layout, 0.0, 0.0), (200.0, 50.0));

        viewport.set_zoom(2.0);
        viewport.set_pan(10.0, 20.0);
        assert_eq!(viewport.room_to_pixel(&layout, 10.0, 10.0), (430.0, 140.0));
        assert_eq!(viewport.pixel_to_room(&layout, 430.0, 140.0), (10.0, 10.0));
    }

    #[test]
    fn test_display() {
        let viewport = Viewport::default();
        assert_eq!(viewport.to_string(), "Zoom: 1.00x | Pan: (0.0, 0.0)");
    }
}
