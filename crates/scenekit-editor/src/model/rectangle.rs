//! Axis-aligned rectangle, anchored at its center.

use scenekit_core::{BoundingBox, Color, Point, Result};

use super::{unknown_attribute, Shape, ShapeCommon, ShapeId};
use crate::properties::{expect_color, expect_number, AttrValue, AttributeDescriptor};
use crate::render::Painter;

pub const RECTANGLE_TAG: &str = "rect";

const DEFAULT_WIDTH: f64 = 100.0;
const DEFAULT_HEIGHT: f64 = 80.0;
const DEFAULT_FILL: Color = Color::rgb(0xe7, 0x4c, 0x3c);
const DEFAULT_STROKE: Color = Color::rgb(0x2c, 0x3e, 0x50);
const DEFAULT_STROKE_WIDTH: f64 = 2.0;

const RECTANGLE_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::number("width", "Width").with_min(1.0),
    AttributeDescriptor::number("height", "Height").with_min(1.0),
    AttributeDescriptor::color("fill", "Fill"),
    AttributeDescriptor::color("stroke", "Stroke"),
    AttributeDescriptor::number("stroke_width", "Stroke Width")
        .with_min(0.5)
        .with_max(20.0)
        .with_step(0.5),
];

#[derive(Debug, Clone)]
pub struct Rectangle {
    common: ShapeCommon,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Rectangle {
    /// Creates a rectangle with default size and style, centered at
    /// `position`.
    pub fn new(id: ShapeId, position: Point) -> Self {
        Self {
            common: ShapeCommon::new(id, position),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill: DEFAULT_FILL,
            stroke: DEFAULT_STROKE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Shape for Rectangle {
    fn id(&self) -> ShapeId {
        self.common.id
    }

    fn type_tag(&self) -> &'static str {
        RECTANGLE_TAG
    }

    fn position(&self) -> Point {
        self.common.position
    }

    fn rotation(&self) -> f64 {
        self.common.rotation
    }

    /// Point-in-box test against the exact bounding box. The rectangle is
    /// unrotated in this model, so the box test and the visual extent
    /// coincide.
    fn hit_test(&self, point: Point) -> bool {
        self.bounding_box().contains(point)
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center(self.common.position, self.width, self.height)
    }

    fn render(&self, painter: &mut Painter<'_>) {
        let bb = self.bounding_box();
        painter.fill_rect(bb, self.fill);
        painter.stroke_rect(bb, self.stroke, self.stroke_width);
    }

    fn move_by(&mut self, delta: Point) {
        self.common.position += delta;
    }

    fn own_attributes(&self) -> &'static [AttributeDescriptor] {
        RECTANGLE_ATTRIBUTES
    }

    fn get_attr(&self, key: &str) -> Option<AttrValue> {
        match key {
            "width" => Some(AttrValue::Number(self.width)),
            "height" => Some(AttrValue::Number(self.height)),
            "fill" => Some(AttrValue::Color(self.fill)),
            "stroke" => Some(AttrValue::Color(self.stroke)),
            "stroke_width" => Some(AttrValue::Number(self.stroke_width)),
            _ => self.common.try_get(key),
        }
    }

    fn set_attr(&mut self, key: &str, value: AttrValue) -> Result<()> {
        match key {
            "width" => self.width = expect_number(key, &value)?,
            "height" => self.height = expect_number(key, &value)?,
            "fill" => self.fill = expect_color(key, &value)?,
            "stroke" => self.stroke = expect_color(key, &value)?,
            "stroke_width" => self.stroke_width = expect_number(key, &value)?,
            _ => {
                return self
                    .common
                    .try_set(key, &value)
                    .unwrap_or_else(|| Err(unknown_attribute(key)))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounding_box_is_centered() {
        let rect = Rectangle::new(ShapeId::new(), Point::new(10.0, 10.0));
        let bb = rect.bounding_box();
        assert_eq!(bb.min_x, -40.0);
        assert_eq!(bb.min_y, -30.0);
        assert_eq!(bb.max_x, 60.0);
        assert_eq!(bb.max_y, 50.0);
    }

    #[test]
    fn hit_test_matches_bounding_box() {
        let rect = Rectangle::new(ShapeId::new(), Point::new(0.0, 0.0));
        assert!(rect.hit_test(Point::new(0.0, 0.0)));
        assert!(rect.hit_test(Point::new(50.0, 40.0)));
        assert!(!rect.hit_test(Point::new(50.1, 0.0)));
        assert!(!rect.hit_test(Point::new(1000.0, 1000.0)));
    }

    #[test]
    fn move_shifts_every_edge() {
        let mut rect = Rectangle::new(ShapeId::new(), Point::new(0.0, 0.0));
        let before = rect.bounding_box();
        rect.move_by(Point::new(5.0, 5.0));
        let after = rect.bounding_box();
        assert_eq!(after, before.translated(Point::new(5.0, 5.0)));
    }

    #[test]
    fn attribute_round_trip() {
        let mut rect = Rectangle::new(ShapeId::new(), Point::new(0.0, 0.0));
        rect.set_attr("width", AttrValue::Number(64.0)).unwrap();
        assert_eq!(rect.get_attr("width"), Some(AttrValue::Number(64.0)));

        let err = rect.set_attr("fill", AttrValue::Number(3.0)).unwrap_err();
        assert!(matches!(
            err,
            scenekit_core::EditorError::InvalidAttributeValue { .. }
        ));
        // Prior value retained after the rejected edit.
        assert_eq!(rect.fill, DEFAULT_FILL);

        assert!(rect.set_attr("bogus", AttrValue::Number(1.0)).is_err());
    }

    #[test]
    fn editable_attributes_include_generic_level() {
        let rect = Rectangle::new(ShapeId::new(), Point::new(0.0, 0.0));
        let keys: Vec<_> = rect
            .editable_attributes()
            .iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(
            keys,
            vec!["width", "height", "fill", "stroke", "stroke_width", "x", "y", "rotation"]
        );
    }
}
