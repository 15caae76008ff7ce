//! Snapshot export.
//!
//! A snapshot is the current render flattened onto an opaque white surface
//! of the same size, with a watermark in the bottom-right corner, encoded as
//! PNG. Files are named `<prefix>-<unix millis>.png`.

use crate::font_manager;
use crate::renderer::pixmap_to_rgb;
use chrono::{DateTime, Utc};
use image::{ImageFormat, RgbImage};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tiny_skia::{Color, Pixmap, PixmapPaint, Transform};

const WATERMARK_SIZE: f32 = 14.0;
/// Distance of the watermark baseline/right edge from the corner.
const WATERMARK_INSET: f32 = 10.0;

fn watermark_color() -> Color {
    Color::from_rgba8(0, 0, 0, 128)
}

/// Errors that can occur while exporting a snapshot.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot export an empty {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// File name for a snapshot taken at `taken_at`.
pub fn snapshot_file_name(prefix: &str, taken_at: DateTime<Utc>) -> String {
    format!("{}-{}.png", prefix, taken_at.timestamp_millis())
}

/// A flattened, watermarked copy of a rendered frame.
#[derive(Debug, Clone)]
pub struct Snapshot {
    file_name: String,
    image: RgbImage,
}

impl Snapshot {
    /// Flattens `rendered` onto white and stamps the watermark.
    ///
    /// The watermark is skipped (with a warning) when no system font exists.
    pub fn capture(
        rendered: &Pixmap,
        watermark: &str,
        file_prefix: &str,
        taken_at: DateTime<Utc>,
    ) -> ExportResult<Self> {
        let (width, height) = (rendered.width(), rendered.height());
        let mut surface =
            Pixmap::new(width, height).ok_or(ExportError::EmptyCanvas { width, height })?;
        surface.fill(Color::WHITE);
        surface.draw_pixmap(
            0,
            0,
            rendered.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        if !watermark.is_empty() {
            stamp_watermark(&mut surface, watermark);
        }

        Ok(Self {
            file_name: snapshot_file_name(file_prefix, taken_at),
            image: pixmap_to_rgb(&surface),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Encodes the snapshot as PNG in memory.
    pub fn encode_png(&self) -> ExportResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Writes the PNG into `directory` and returns its path.
    ///
    /// The image is fully encoded before anything touches the disk, and the
    /// file only appears under its final name once completely written.
    pub fn write_png(&self, directory: &Path) -> ExportResult<PathBuf> {
        let bytes = self.encode_png()?;
        std::fs::create_dir_all(directory)?;

        let target = directory.join(&self.file_name);
        let temp = directory.join(format!(".{}.tmp", self.file_name));
        let result = std::fs::File::create(&temp)
            .and_then(|mut file| {
                file.write_all(&bytes)?;
                file.sync_all()
            })
            .and_then(|_| std::fs::rename(&temp, &target));
        if let Err(e) = result {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }

        tracing::info!(path = %target.display(), bytes = bytes.len(), "Exported snapshot");
        Ok(target)
    }
}

fn stamp_watermark(surface: &mut Pixmap, watermark: &str) {
    let Some(font) = font_manager::regular_font() else {
        tracing::warn!("No font available, exporting without watermark");
        return;
    };
    let Some(text) = font_manager::render_text(font, watermark, WATERMARK_SIZE, watermark_color())
    else {
        return;
    };

    // Right aligned, baseline WATERMARK_INSET above the bottom edge.
    let x = surface.width() as f32 - WATERMARK_INSET - text.width();
    let y = surface.height() as f32 - WATERMARK_INSET - text.ascent;
    surface.draw_pixmap(
        x.round() as i32,
        y.round() as i32,
        text.pixmap.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}
