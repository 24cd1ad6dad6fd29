//! Scene rendering on top of tiny-skia.
//!
//! [`Painter`] wraps a pixmap and exposes the primitive drawing calls the
//! shape kinds need. Every call carries its own paint and stroke, so no
//! style state survives between calls and sibling shapes render
//! independently. [`render_scene`] is the per-frame entry point: clear,
//! paint in insertion order, then draw the selection outline.

use image::{Rgb, RgbImage};
use scenekit_core::{BoundingBox, Color, Point};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform};
use tracing::warn;

use crate::scene::Scene;

/// Surface background.
pub const BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);
/// Dashed selection-outline style.
pub const SELECTION_STROKE: Color = Color::rgb(0x21, 0x96, 0xf3);
const SELECTION_DASH: f32 = 4.0;

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 0xff);
    paint.anti_alias = true;
    paint
}

fn rect_for(bb: BoundingBox) -> Option<Rect> {
    Rect::from_ltrb(
        bb.min_x as f32,
        bb.min_y as f32,
        bb.max_x as f32,
        bb.max_y as f32,
    )
}

/// Drawing surface handed to [`crate::model::Shape::render`].
pub struct Painter<'a> {
    pixmap: &'a mut Pixmap,
}

impl<'a> Painter<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self { pixmap }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 0xff));
    }

    pub fn fill_rect(&mut self, bb: BoundingBox, fill: Color) {
        if let Some(rect) = rect_for(bb) {
            let path = PathBuilder::from_rect(rect);
            self.pixmap.fill_path(
                &path,
                &paint_for(fill),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    pub fn stroke_rect(&mut self, bb: BoundingBox, stroke: Color, width: f64) {
        if let Some(rect) = rect_for(bb) {
            let path = PathBuilder::from_rect(rect);
            let stroke_style = Stroke {
                width: width as f32,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint_for(stroke),
                &stroke_style,
                Transform::identity(),
                None,
            );
        }
    }

    pub fn fill_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, fill: Color) {
        let bb = BoundingBox::from_center(center, 2.0 * radius_x, 2.0 * radius_y);
        if let Some(path) = rect_for(bb).and_then(PathBuilder::from_oval) {
            self.pixmap.fill_path(
                &path,
                &paint_for(fill),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    pub fn stroke_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        stroke: Color,
        width: f64,
    ) {
        let bb = BoundingBox::from_center(center, 2.0 * radius_x, 2.0 * radius_y);
        if let Some(path) = rect_for(bb).and_then(PathBuilder::from_oval) {
            let stroke_style = Stroke {
                width: width as f32,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint_for(stroke),
                &stroke_style,
                Transform::identity(),
                None,
            );
        }
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Color, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        if let Some(path) = pb.finish() {
            let stroke_style = Stroke {
                width: width as f32,
                line_cap: LineCap::Round,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint_for(stroke),
                &stroke_style,
                Transform::identity(),
                None,
            );
        }
    }

    /// Dashed outline used for the selection highlight.
    pub fn dashed_rect(&mut self, bb: BoundingBox, stroke: Color, width: f64) {
        if let Some(rect) = rect_for(bb) {
            let path = PathBuilder::from_rect(rect);
            let stroke_style = Stroke {
                width: width as f32,
                dash: StrokeDash::new(vec![SELECTION_DASH, SELECTION_DASH], 0.0),
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint_for(stroke),
                &stroke_style,
                Transform::identity(),
                None,
            );
        }
    }
}

/// Renders one frame: clears the surface, paints every shape in insertion
/// order (later shapes occlude earlier ones), then outlines the selected
/// shape with a dashed box from its bounding box.
pub fn render_scene(scene: &Scene, pixmap: &mut Pixmap) {
    let mut painter = Painter::new(pixmap);
    painter.clear(BACKGROUND);
    for shape in scene.iter() {
        shape.render(&mut painter);
    }
    if let Some(id) = scene.selected_id() {
        match scene.get(id) {
            Some(shape) => painter.dashed_rect(shape.bounding_box(), SELECTION_STROKE, 1.0),
            None => warn!(%id, "selected shape missing from scene"),
        }
    }
}

/// Renders the scene into an RGB image buffer for display or export.
pub fn render_to_image(scene: &Scene, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    render_scene(scene, &mut pixmap);

    let mut img = RgbImage::new(width, height);
    for (x, y, out) in img.enumerate_pixels_mut() {
        if let Some(px) = pixmap.pixel(x, y) {
            let c = px.demultiply();
            *out = Rgb([c.red(), c.green(), c.blue()]);
        }
    }
    img
}
