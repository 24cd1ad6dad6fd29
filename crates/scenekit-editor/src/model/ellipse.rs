//! Ellipse (circle when the radii match), anchored at its center.

use scenekit_core::{BoundingBox, Color, Point, Result};

use super::{unknown_attribute, Shape, ShapeCommon, ShapeId, HIT_TOLERANCE};
use crate::properties::{expect_color, expect_number, AttrValue, AttributeDescriptor};
use crate::render::Painter;

pub const ELLIPSE_TAG: &str = "ellipse";

const DEFAULT_RADIUS: f64 = 50.0;
const DEFAULT_FILL: Color = Color::rgb(0x34, 0x98, 0xdb);
const DEFAULT_STROKE: Color = Color::rgb(0x2c, 0x3e, 0x50);
const DEFAULT_STROKE_WIDTH: f64 = 2.0;

const ELLIPSE_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::number("radius_x", "Radius X").with_min(1.0),
    AttributeDescriptor::number("radius_y", "Radius Y").with_min(1.0),
    AttributeDescriptor::color("fill", "Fill"),
    AttributeDescriptor::color("stroke", "Stroke"),
    AttributeDescriptor::number("stroke_width", "Stroke Width")
        .with_min(0.5)
        .with_max(20.0)
        .with_step(0.5),
];

#[derive(Debug, Clone)]
pub struct Ellipse {
    common: ShapeCommon,
    pub radius_x: f64,
    pub radius_y: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Ellipse {
    /// Creates a circle of the default radius centered at `position`.
    pub fn new(id: ShapeId, position: Point) -> Self {
        Self {
            common: ShapeCommon::new(id, position),
            radius_x: DEFAULT_RADIUS,
            radius_y: DEFAULT_RADIUS,
            fill: DEFAULT_FILL,
            stroke: DEFAULT_STROKE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn with_radii(mut self, radius_x: f64, radius_y: f64) -> Self {
        self.radius_x = radius_x;
        self.radius_y = radius_y;
        self
    }

    /// Half the stroke width plus the fixed pick margin.
    fn hit_padding(&self) -> f64 {
        self.stroke_width / 2.0 + HIT_TOLERANCE
    }
}

impl Shape for Ellipse {
    fn id(&self) -> ShapeId {
        self.common.id
    }

    fn type_tag(&self) -> &'static str {
        ELLIPSE_TAG
    }

    fn position(&self) -> Point {
        self.common.position
    }

    fn rotation(&self) -> f64 {
        self.common.rotation
    }

    /// Normalized-radius inequality `(dx/rX)^2 + (dy/rY)^2 <= 1` with the
    /// radii expanded by the hit padding.
    fn hit_test(&self, point: Point) -> bool {
        let dx = point.x - self.common.position.x;
        let dy = point.y - self.common.position.y;
        let rx = self.radius_x + self.hit_padding();
        let ry = self.radius_y + self.hit_padding();
        (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
    }

    /// Box around the padded hit region, so every hit-passing point is
    /// inside it.
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center(
            self.common.position,
            2.0 * self.radius_x,
            2.0 * self.radius_y,
        )
        .inflate(self.hit_padding())
    }

    fn render(&self, painter: &mut Painter<'_>) {
        let center = self.common.position;
        painter.fill_ellipse(center, self.radius_x, self.radius_y, self.fill);
        painter.stroke_ellipse(
            center,
            self.radius_x,
            self.radius_y,
            self.stroke,
            self.stroke_width,
        );
    }

    fn move_by(&mut self, delta: Point) {
        self.common.position += delta;
    }

    fn own_attributes(&self) -> &'static [AttributeDescriptor] {
        ELLIPSE_ATTRIBUTES
    }

    fn get_attr(&self, key: &str) -> Option<AttrValue> {
        match key {
            "radius_x" => Some(AttrValue::Number(self.radius_x)),
            "radius_y" => Some(AttrValue::Number(self.radius_y)),
            "fill" => Some(AttrValue::Color(self.fill)),
            "stroke" => Some(AttrValue::Color(self.stroke)),
            "stroke_width" => Some(AttrValue::Number(self.stroke_width)),
            _ => self.common.try_get(key),
        }
    }

    fn set_attr(&mut self, key: &str, value: AttrValue) -> Result<()> {
        match key {
            "radius_x" => self.radius_x = expect_number(key, &value)?,
            "radius_y" => self.radius_y = expect_number(key, &value)?,
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
