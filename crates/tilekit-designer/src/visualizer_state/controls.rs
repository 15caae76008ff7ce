//! Control-surface inputs.
//!
//! Text inputs never fail: anything unparseable or out of range keeps the
//! last good value and still triggers a refresh. Each setter returns whether
//! the input was accepted.

use super::TileVisualizer;
use tilekit_core::units::{parse_decimal, parse_inches};
use tilekit_core::{find_preset, GroutWidth, Pattern, Rgb, TileSpec};
use tilekit_settings::RecordStorage;

impl<S: RecordStorage> TileVisualizer<S> {
    /// Room width in feet.
    pub fn set_room_width_input(&mut self, input: &str) -> bool {
        let parsed = parse_decimal(input)
            .and_then(|v| self.design.room.with_width(v).map_err(|e| e.to_string()));
        self.apply("room width", input, parsed, |design, room| design.room = room)
    }

    /// Room length in feet.
    pub fn set_room_length_input(&mut self, input: &str) -> bool {
        let parsed = parse_decimal(input)
            .and_then(|v| self.design.room.with_length(v).map_err(|e| e.to_string()));
        self.apply("room length", input, parsed, |design, room| design.room = room)
    }

    /// Selects a tile preset by name (`"12x12"`, `"3x6 subway"`, ...).
    pub fn select_tile_preset(&mut self, name: &str) -> bool {
        let parsed = find_preset(name)
            .map(|preset| preset.spec())
            .ok_or_else(|| "unknown preset".to_string());
        self.apply("tile preset", name, parsed, |design, tile| design.tile = tile)
    }

    /// Custom tile size in inches. Both values must be valid.
    pub fn set_custom_tile_input(&mut self, width: &str, height: &str) -> bool {
        let parsed = parse_inches(width)
            .and_then(|w| parse_inches(height).map(|h| (w, h)))
            .and_then(|(w, h)| TileSpec::new(w, h).map_err(|e| e.to_string()));
        let input = format!("{width} x {height}");
        self.apply("custom tile", &input, parsed, |design, tile| design.tile = tile)
    }

    /// Grout width in inches, snapped to the nearest sixteenth.
    pub fn set_grout_width_input(&mut self, input: &str) -> bool {
        let parsed = parse_inches(input).map(GroutWidth::quantize);
        self.apply("grout width", input, parsed, |design, width| {
            design.grout.width = width
        })
    }

    pub fn set_grout_width(&mut self, width: GroutWidth) {
        self.edit(|design| design.grout.width = width);
    }

    /// Grout color as hex or swatch name.
    pub fn set_grout_color_input(&mut self, input: &str) -> bool {
        let parsed = input.parse::<Rgb>().map_err(|e| e.to_string());
        self.apply("grout color", input, parsed, |design, color| {
            design.grout.color = color
        })
    }

    /// Tile color as hex or swatch name.
    pub fn set_tile_color_input(&mut self, input: &str) -> bool {
        let parsed = input.parse::<Rgb>().map_err(|e| e.to_string());
        self.apply("tile color", input, parsed, |design, color| {
            design.tile_color = color
        })
    }

    /// Tile price per unit of area.
    pub fn set_tile_price_input(&mut self, input: &str) -> bool {
        let parsed = parse_decimal(input).and_then(|price| {
            if price >= 0.0 {
                Ok(price)
            } else {
                Err("price cannot be negative".to_string())
            }
        });
        self.apply("tile price", input, parsed, |design, price| {
            if let Err(e) = design.set_tile_price(price) {
                tracing::warn!(error = %e, "Tile price rejected");
            }
        })
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.edit(|design| design.pattern = pattern);
    }

    pub fn set_pattern_input(&mut self, input: &str) -> bool {
        let parsed = input.parse::<Pattern>().map_err(|e| e.to_string());
        self.apply("pattern", input, parsed, |design, pattern| {
            design.pattern = pattern
        })
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.refresh();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.refresh();
    }

    pub fn zoom_fit(&mut self) {
        self.viewport.zoom_fit();
        self.refresh();
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
        self.refresh();
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
        self.refresh();
    }

    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.viewport.set_canvas_size(width, height);
        }
        self.refresh();
    }

    /// Applies a parsed value, or logs and keeps the old one.
    fn apply<T>(
        &mut self,
        field: &str,
        input: &str,
        parsed: Result<T, String>,
        assign: impl FnOnce(&mut tilekit_core::DesignState, T),
    ) -> bool {
        match parsed {
            Ok(value) => {
                self.edit(|design| assign(design, value));
                true
            }
            Err(reason) => {
                tracing::warn!(field, input, %reason, "Ignoring invalid input");
                self.refresh();
                false
            }
        }
    }
}
