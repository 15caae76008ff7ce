//! System font lookup and text rasterisation.
//!
//! Fonts come from the system font database; there is no bundled fallback,
//! so callers must cope with `None` and skip text when no face is installed.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point as rt_point, Font, Scale};
use std::{fs, sync::OnceLock};
use tiny_skia::{Color, Pixmap};

/// Text rendered into its own premultiplied RGBA pixmap.
pub struct TextImage {
    pub pixmap: Pixmap,
    /// Distance from the top of the pixmap to the baseline.
    pub ascent: f32,
}

impl TextImage {
    pub fn width(&self) -> f32 {
        self.pixmap.width() as f32
    }
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "Loaded system fonts");
        db
    })
}

/// Bold sans-serif face used for dimension labels.
pub fn label_font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| load_font_from_system(true)).as_ref()
}

/// Regular sans-serif face used for the export watermark.
pub fn regular_font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| load_font_from_system(false)).as_ref()
}

fn load_font_from_system(bold: bool) -> Option<Font<'static>> {
    let families = [Family::Name("Arial"), Family::SansSerif];
    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let Some(id) = db().query(&query) else {
        tracing::warn!(bold, "No system sans-serif font found; text will be skipped");
        return None;
    };
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}

/// Advance width of `text` at `size` pixels.
pub fn text_width(font: &Font<'_>, text: &str, size: f32) -> f32 {
    let scale = Scale::uniform(size);
    font.layout(text, scale, rt_point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Rasterises one line of text in a solid color.
///
/// Returns `None` for empty text.
pub fn render_text(font: &Font<'_>, text: &str, size: f32, color: Color) -> Option<TextImage> {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let width = text_width(font, text, size).ceil() as u32;
    let height = (v_metrics.ascent - v_metrics.descent).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height)?;

    let stride = width as usize * 4;
    let data = pixmap.data_mut();
    for glyph in font.layout(text, scale, rt_point(0.0, v_metrics.ascent)) {
        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bounding_box.min.x;
            let py = gy as i32 + bounding_box.min.y;
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                return;
            }

            // Premultiplied; overlapping glyph edges keep the stronger coverage.
            let alpha = coverage.clamp(0.0, 1.0) * color.alpha();
            let idx = py as usize * stride + px as usize * 4;
            let a = (alpha * 255.0).round() as u8;
            if a <= data[idx + 3] {
                return;
            }
            data[idx] = (color.red() * alpha * 255.0).round() as u8;
            data[idx + 1] = (color.green() * alpha * 255.0).round() as u8;
            data[idx + 2] = (color.blue() * alpha * 255.0).round() as u8;
            data[idx + 3] = a;
        });
    }

    Some(TextImage {
        pixmap,
        ascent: v_metrics.ascent,
    })
}
