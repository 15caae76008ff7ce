//! Floor renderer.
//!
//! Rendering is split in two steps. [`plan_scene`] is pure: it fits the room
//! into the viewport and runs the pattern strategy, producing a [`Scene`]
//! with every coordinate the rasteriser needs. [`render_scene`] then paints
//! that scene with tiny-skia.
//!
//! Paint order:
//! - white background
//! - per tile: grout backing, jittered tile face, faint edge
//! - room outline
//! - dimension labels (screen space, unaffected by pan/zoom)

use crate::font_manager;
use crate::layout::{layout_for, LayoutFrame, LayoutInput, PatternLayout, PixelSize};
use crate::viewport::{RoomLayout, Viewport};
use image::{Rgb as ImageRgb, RgbImage};
use rand::Rng;
use tilekit_core::units::format_feet;
use tilekit_core::{DesignState, Rgb};
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

/// Maximum per-channel shade variation applied to each tile.
pub const TILE_JITTER: i16 = 5;

const LABEL_SIZE: f32 = 14.0;
/// Gap between the room edge and its dimension label.
const LABEL_GAP: f64 = 15.0;
const OUTLINE_WIDTH: f32 = 2.0;

fn outline_color() -> Color {
    Color::from_rgba8(0x33, 0x33, 0x33, 255)
}
fn edge_color() -> Color {
    Color::from_rgba8(0, 0, 0, 26)
}

fn solid(color: Rgb) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, 255)
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub room: RoomLayout,
    pub layout: PatternLayout,
    /// Grout joint in room pixels.
    pub grout_px: f64,
    pub tile_color: Rgb,
    pub grout_color: Rgb,
    pub width_label: String,
    pub length_label: String,
}

impl Scene {
    /// Room pixels to screen: pan, then zoom, then center the room.
    pub fn room_transform(&self) -> Transform {
        Transform::from_translate(self.pan_x as f32, self.pan_y as f32)
            .pre_scale(self.zoom as f32, self.zoom as f32)
            .pre_translate(self.room.offset_x as f32, self.room.offset_y as f32)
    }

    /// Transform for the tile placements, including the layout frame.
    pub fn tile_transform(&self) -> Transform {
        match self.layout.frame {
            LayoutFrame::Room => self.room_transform(),
            LayoutFrame::RotatedAboutCenter { degrees, cx, cy } => self
                .room_transform()
                .pre_concat(Transform::from_rotate_at(degrees as f32, cx as f32, cy as f32)),
        }
    }

    /// Screen anchor of the width label (centered above the room).
    pub fn width_label_anchor(&self) -> (f64, f64) {
        (
            self.room.offset_x + self.room.width_px / 2.0,
            self.room.offset_y - LABEL_GAP,
        )
    }

    /// Screen anchor of the length label (left of the room, reading upwards).
    pub fn length_label_anchor(&self) -> (f64, f64) {
        (
            self.room.offset_x - LABEL_GAP,
            self.room.offset_y + self.room.height_px / 2.0,
        )
    }
}

/// Computes the scene for a design under the given view.
pub fn plan_scene(design: &DesignState, viewport: &Viewport) -> Scene {
    let room = viewport.room_layout(&design.room);
    let input = LayoutInput {
        room: PixelSize::new(room.width_px, room.height_px),
        tile: PixelSize::new(
            room.inches_to_px(design.tile.width()),
            room.inches_to_px(design.tile.height()),
        ),
        grout: room.inches_to_px(design.grout.width.inches()),
    };
    let layout = layout_for(design.pattern, &input);

    Scene {
        canvas_width: viewport.canvas_width().round().max(1.0) as u32,
        canvas_height: viewport.canvas_height().round().max(1.0) as u32,
        zoom: viewport.zoom(),
        pan_x: viewport.pan_x(),
        pan_y: viewport.pan_y(),
        room,
        layout,
        grout_px: input.grout,
        tile_color: design.tile_color,
        grout_color: design.grout.color,
        width_label: format!("{} wide", format_feet(design.room.width())),
        length_label: format!("{} long", format_feet(design.room.length())),
    }
}

/// Paints a planned scene. Returns `None` if the pixmap cannot be allocated.
pub fn render_scene<R: Rng>(scene: &Scene, rng: &mut R) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(scene.canvas_width, scene.canvas_height)?;
    pixmap.fill(Color::WHITE);

    draw_tiles(&mut pixmap, scene, rng);
    draw_outline(&mut pixmap, scene);
    draw_labels(&mut pixmap, scene);

    Some(pixmap)
}

/// Plans and paints in one go.
pub fn render_design<R: Rng>(
    design: &DesignState,
    viewport: &Viewport,
    rng: &mut R,
) -> Option<Pixmap> {
    render_scene(&plan_scene(design, viewport), rng)
}

fn rect_path(x: f64, y: f64, width: f64, height: f64) -> Option<tiny_skia::Path> {
    Rect::from_xywh(x as f32, y as f32, width as f32, height as f32).map(PathBuilder::from_rect)
}

fn draw_tiles<R: Rng>(pixmap: &mut Pixmap, scene: &Scene, rng: &mut R) {
    let transform = scene.tile_transform();
    let grout = scene.grout_px;

    let mut grout_paint = Paint::default();
    grout_paint.set_color(solid(scene.grout_color));
    grout_paint.anti_alias = true;

    let mut edge_paint = Paint::default();
    edge_paint.set_color(edge_color());
    edge_paint.anti_alias = true;
    let edge = Stroke {
        width: 1.0,
        ..Default::default()
    };

    for placement in &scene.layout.placements {
        let (x, y, w, h) = placement.footprint(grout);
        if let Some(path) = rect_path(x, y, w, h) {
            pixmap.fill_path(&path, &grout_paint, FillRule::Winding, transform, None);
        }

        let (x, y, w, h) = placement.face(grout);
        let Some(face) = rect_path(x, y, w, h) else {
            continue;
        };
        let shade = scene
            .tile_color
            .shifted(rng.random_range(-TILE_JITTER..=TILE_JITTER));
        let mut face_paint = Paint::default();
        face_paint.set_color(solid(shade));
        face_paint.anti_alias = true;
        pixmap.fill_path(&face, &face_paint, FillRule::Winding, transform, None);
        pixmap.stroke_path(&face, &edge_paint, &edge, transform, None);
    }
}

fn draw_outline(pixmap: &mut Pixmap, scene: &Scene) {
    let Some(path) = rect_path(0.0, 0.0, scene.room.width_px, scene.room.height_px) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(outline_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: OUTLINE_WIDTH,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, scene.room_transform(), None);
}

fn draw_labels(pixmap: &mut Pixmap, scene: &Scene) {
    let Some(font) = font_manager::label_font() else {
        return;
    };

    if let Some(text) =
        font_manager::render_text(font, &scene.width_label, LABEL_SIZE, outline_color())
    {
        let (ax, ay) = scene.width_label_anchor();
        let x = ax as f32 - text.width() / 2.0;
        let y = ay as f32 - text.ascent;
        pixmap.draw_pixmap(
            x.round() as i32,
            y.round() as i32,
            text.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    if let Some(text) =
        font_manager::render_text(font, &scene.length_label, LABEL_SIZE, outline_color())
    {
        let (ax, ay) = scene.length_label_anchor();
        let x = ax as f32 - text.width() / 2.0;
        let y = ay as f32 - text.ascent;
        pixmap.draw_pixmap(
            x.round() as i32,
            y.round() as i32,
            text.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::from_rotate_at(-90.0, ax as f32, ay as f32),
            None,
        );
    }
}

/// Converts an opaque pixmap to an RGB image, dropping alpha.
pub fn pixmap_to_rgb(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let data = pixmap.data();
    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        ImageRgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
