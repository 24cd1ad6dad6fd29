//! Line segment. The anchor is the start point; the endpoint is an
//! auxiliary point owned by the shape.

use scenekit_core::{BoundingBox, Color, Point, Result};

use super::{unknown_attribute, Shape, ShapeCommon, ShapeId, HIT_TOLERANCE};
use crate::properties::{expect_color, expect_number, AttrValue, AttributeDescriptor};
use crate::render::Painter;

pub const LINE_TAG: &str = "line";

const DEFAULT_STROKE: Color = Color::rgb(0x2c, 0x3e, 0x50);
const DEFAULT_STROKE_WIDTH: f64 = 2.0;
/// Default endpoint offset from the start point.
const DEFAULT_EXTENT: Point = Point { x: 100.0, y: 100.0 };
/// Extra slack on the bounding box beyond the hit padding, so the selection
/// outline clears the stroke caps.
const BOX_PADDING: f64 = 5.0;

const LINE_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::color("stroke", "Stroke Color"),
    AttributeDescriptor::number("stroke_width", "Stroke Width")
        .with_min(1.0)
        .with_max(50.0)
        .with_step(0.5),
    AttributeDescriptor::number("start_x", "Start X"),
    AttributeDescriptor::number("start_y", "Start Y"),
    AttributeDescriptor::number("end_x", "End X"),
    AttributeDescriptor::number("end_y", "End Y"),
];

/// The generic x/y descriptors are suppressed: the segment is edited
/// through start/end coordinates instead. The position field itself stays
/// addressable.
const LINE_HIDDEN: &[&str] = &["x", "y"];

#[derive(Debug, Clone)]
pub struct Line {
    common: ShapeCommon,
    pub end_point: Point,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Line {
    /// Creates a line from `position` to `position + (100, 100)` with the
    /// default style.
    pub fn new(id: ShapeId, position: Point) -> Self {
        Self {
            common: ShapeCommon::new(id, position),
            end_point: position + DEFAULT_EXTENT,
            stroke: DEFAULT_STROKE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn with_end_point(mut self, end_point: Point) -> Self {
        self.end_point = end_point;
        self
    }

    fn hit_padding(&self) -> f64 {
        self.stroke_width / 2.0 + HIT_TOLERANCE
    }

    /// Closest point on the segment (not the infinite line) to `p`.
    fn closest_point(&self, p: Point) -> Point {
        let start = self.common.position;
        let d = self.end_point - start;
        let len_sq = d.x * d.x + d.y * d.y;
        if len_sq == 0.0 {
            // Degenerate zero-length segment collapses to the anchor.
            return start;
        }
        let t = (((p.x - start.x) * d.x + (p.y - start.y) * d.y) / len_sq).clamp(0.0, 1.0);
        Point::new(start.x + t * d.x, start.y + t * d.y)
    }
}

impl Shape for Line {
    fn id(&self) -> ShapeId {
        self.common.id
    }

    fn type_tag(&self) -> &'static str {
        LINE_TAG
    }

    fn position(&self) -> Point {
        self.common.position
    }

    fn rotation(&self) -> f64 {
        self.common.rotation
    }

    /// Distance from the query point to its clamped projection onto the
    /// segment, accepted within the hit padding. A zero-length segment
    /// reduces to a circular region around the anchor.
    fn hit_test(&self, point: Point) -> bool {
        point.distance_to(self.closest_point(point)) <= self.hit_padding()
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.common.position, self.end_point)
            .inflate(self.stroke_width / 2.0 + BOX_PADDING)
    }

    fn render(&self, painter: &mut Painter<'_>) {
        painter.line(
            self.common.position,
            self.end_point,
            self.stroke,
            self.stroke_width,
        );
    }

    fn move_by(&mut self, delta: Point) {
        self.common.position += delta;
        self.end_point += delta;
    }

    fn own_attributes(&self) -> &'static [AttributeDescriptor] {
        LINE_ATTRIBUTES
    }

    fn hidden_attributes(&self) -> &'static [&'static str] {
        LINE_HIDDEN
    }

    fn get_attr(&self, key: &str) -> Option<AttrValue> {
        match key {
            "stroke" => Some(AttrValue::Color(self.stroke)),
            "stroke_width" => Some(AttrValue::Number(self.stroke_width)),
            "start_x" => Some(AttrValue::Number(self.common.position.x)),
            "start_y" => Some(AttrValue::Number(self.common.position.y)),
            "end_x" => Some(AttrValue::Number(self.end_point.x)),
            "end_y" => Some(AttrValue::Number(self.end_point.y)),
            _ => self.common.try_get(key),
        }
    }

    fn set_attr(&mut self, key: &str, value: AttrValue) -> Result<()> {
        match key {
            "stroke" => self.stroke = expect_color(key, &value)?,
            "stroke_width" => self.stroke_width = expect_number(key, &value)?,
            "start_x" => self.common.position.x = expect_number(key, &value)?,
            "start_y" => self.common.position.y = expect_number(key, &value)?,
            "end_x" => self.end_point.x = expect_number(key, &value)?,
            "end_y" => self.end_point.y = expect_number(key, &value)?,
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

    fn line(start: (f64, f64), end: (f64, f64)) -> Line {
        Line::new(ShapeId::new(), Point::new(start.0, start.1))
            .with_end_point(Point::new(end.0, end.1))
    }

    #[test]
    fn midpoint_hits() {
        let l = line((0.0, 0.0), (100.0, 100.0));
        assert!(l.hit_test(Point::new(50.0, 50.0)));
    }

    #[test]
    fn perpendicular_probe_beyond_padding_misses() {
        // Horizontal segment; padding is 2/2 + 3 = 4.
        let l = line((0.0, 0.0), (100.0, 0.0));
        assert!(l.hit_test(Point::new(50.0, 4.0)));
        assert!(!l.hit_test(Point::new(50.0, 11.0)));
    }

    #[test]
    fn projection_is_clamped_to_the_segment() {
        let l = line((0.0, 0.0), (100.0, 0.0));
        // Beyond the end cap the distance is measured to the endpoint.
        assert!(l.hit_test(Point::new(104.0, 0.0)));
        assert!(!l.hit_test(Point::new(105.0, 0.0)));
    }

    #[test]
    fn degenerate_segment_is_a_circular_region() {
        let l = line((10.0, 10.0), (10.0, 10.0));
        assert!(l.hit_test(Point::new(14.0, 10.0)));
        assert!(l.hit_test(Point::new(10.0, 6.0)));
        assert!(!l.hit_test(Point::new(14.1, 10.0)));
    }

    #[test]
    fn move_translates_both_endpoints() {
        let mut l = line((0.0, 0.0), (100.0, 50.0));
        l.move_by(Point::new(7.0, -3.0));
        assert_eq!(l.position(), Point::new(7.0, -3.0));
        assert_eq!(l.end_point, Point::new(107.0, 47.0));
    }

    #[test]
    fn accessor_attributes_write_through() {
        let mut l = line((0.0, 0.0), (100.0, 100.0));
        l.set_attr("start_x", AttrValue::Number(5.0)).unwrap();
        l.set_attr("end_y", AttrValue::Number(42.0)).unwrap();
        assert_eq!(l.position().x, 5.0);
        assert_eq!(l.end_point.y, 42.0);
        assert_eq!(l.get_attr("end_y"), Some(AttrValue::Number(42.0)));
    }

    #[test]
    fn generic_position_keys_are_hidden_but_addressable() {
        let l = line((0.0, 0.0), (100.0, 100.0));
        let keys: Vec<_> = l.editable_attributes().iter().map(|d| d.key).collect();
        assert!(!keys.contains(&"x"));
        assert!(!keys.contains(&"y"));
        assert!(keys.contains(&"start_x"));
        assert!(keys.contains(&"rotation"));
        // Hiding is presentational only.
        assert_eq!(l.get_attr("x"), Some(AttrValue::Number(0.0)));
    }

    #[test]
    fn bounding_box_contains_hit_region() {
        let l = line((0.0, 0.0), (100.0, 0.0));
        let bb = l.bounding_box();
        assert!(bb.contains(Point::new(50.0, 4.0)));
        assert!(bb.contains(Point::new(-4.0, 0.0)));
        assert_eq!(bb.min_y, -6.0);
    }
}
