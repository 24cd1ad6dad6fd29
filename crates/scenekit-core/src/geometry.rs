//! 2D geometry value types used throughout the editor.
//!
//! Coordinates are in drawing-surface pixels. Bounding boxes are always
//! derived from shape geometry on demand and never stored.

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
///
/// Also used as a displacement vector for translations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned bounding box.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. The constructors
/// normalize their inputs so the invariant holds for any argument order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Creates a bounding box spanning two corner points, in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Creates a bounding box of the given size centered on `center`.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        let half_w = width.abs() / 2.0;
        let half_h = height.abs() / 2.0;
        Self {
            min_x: center.x - half_w,
            min_y: center.y - half_h,
            max_x: center.x + half_w,
            max_y: center.y + half_h,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns true if the point lies inside the box, edges included.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Returns the box grown by `padding` on every side.
    ///
    /// Negative padding shrinks the box; it is clamped so the result
    /// never inverts past the box center.
    pub fn inflate(&self, padding: f64) -> Self {
        let padding = padding.max(-self.width() / 2.0).max(-self.height() / 2.0);
        Self {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            max_x: self.max_x + padding,
            max_y: self.max_y + padding,
        }
    }

    /// Returns the box translated by `delta`.
    pub fn translated(&self, delta: Point) -> Self {
        Self {
            min_x: self.min_x + delta.x,
            min_y: self.min_y + delta.y,
            max_x: self.max_x + delta.x,
            max_y: self.max_y + delta.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let p = Point::new(3.0, 4.0) + Point::new(-1.0, 2.0);
        assert_eq!(p, Point::new(2.0, 6.0));
        assert_eq!(p - Point::new(2.0, 6.0), Point::new(0.0, 0.0));
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn from_points_normalizes_corner_order() {
        let bb = BoundingBox::from_points(Point::new(10.0, -2.0), Point::new(-5.0, 7.0));
        assert_eq!(bb.min_x, -5.0);
        assert_eq!(bb.min_y, -2.0);
        assert_eq!(bb.max_x, 10.0);
        assert_eq!(bb.max_y, 7.0);
    }

    #[test]
    fn contains_includes_edges() {
        let bb = BoundingBox::from_center(Point::new(0.0, 0.0), 10.0, 10.0);
        assert!(bb.contains(Point::new(5.0, 0.0)));
        assert!(bb.contains(Point::new(-5.0, -5.0)));
        assert!(!bb.contains(Point::new(5.1, 0.0)));
    }

    #[test]
    fn inflate_and_translate() {
        let bb = BoundingBox::from_center(Point::new(0.0, 0.0), 10.0, 10.0);
        let grown = bb.inflate(2.0);
        assert_eq!(grown.min_x, -7.0);
        assert_eq!(grown.max_y, 7.0);

        let moved = bb.translated(Point::new(5.0, 5.0));
        assert_eq!(moved.min_x, 0.0);
        assert_eq!(moved.max_x, 10.0);
        assert_eq!(moved.center(), Point::new(5.0, 5.0));
    }
}
