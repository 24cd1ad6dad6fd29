//! The polymorphic shape model.
//!
//! Every concrete kind implements the object-safe [`Shape`] trait: identity,
//! anchor position, analytic hit-testing, bounding box, rendering, and
//! translation, plus reflective attribute access keyed by the descriptor
//! tables in [`crate::properties`]. The kind set is open: new kinds only
//! need a `Shape` impl and a factory registered with the type registry.

use std::fmt;

use scenekit_core::{BoundingBox, EditorError, Point, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::properties::{
    expect_number, merge_descriptors, AttrValue, AttributeDescriptor, BASE_ATTRIBUTES,
};
use crate::render::Painter;

pub mod ellipse;
pub mod line;
pub mod rectangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;

/// Fixed pick margin added to half the stroke width so thin strokes stay
/// easy to hit. Deliberately not scaled by zoom or DPI.
pub const HIT_TOLERANCE: f64 = 3.0;

/// Stable shape identity, unique per scene and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    /// Allocates a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ShapeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// State shared by every shape kind: identity, anchor point, rotation.
///
/// The anchor's geometric meaning is kind-specific (center for rectangles
/// and ellipses, segment start for lines). Concrete kinds embed this struct
/// and delegate the generic attribute keys to it.
#[derive(Debug, Clone)]
pub struct ShapeCommon {
    pub id: ShapeId,
    pub position: Point,
    /// Rotation in degrees, editable in [0, 360]. Stored on every kind;
    /// the built-in kinds are modeled unrotated so it does not enter their
    /// geometry.
    pub rotation: f64,
}

impl ShapeCommon {
    pub fn new(id: ShapeId, position: Point) -> Self {
        Self {
            id,
            position,
            rotation: 0.0,
        }
    }

    /// Reads a generic attribute, or `None` if `key` is not a generic one.
    pub fn try_get(&self, key: &str) -> Option<AttrValue> {
        match key {
            "x" => Some(AttrValue::Number(self.position.x)),
            "y" => Some(AttrValue::Number(self.position.y)),
            "rotation" => Some(AttrValue::Number(self.rotation)),
            _ => None,
        }
    }

    /// Writes a generic attribute. Returns `None` if `key` is not generic,
    /// so the caller can report it as unknown.
    pub fn try_set(&mut self, key: &str, value: &AttrValue) -> Option<Result<()>> {
        let result = match key {
            "x" => expect_number(key, value).map(|n| self.position.x = n),
            "y" => expect_number(key, value).map(|n| self.position.y = n),
            "rotation" => expect_number(key, value).map(|n| self.rotation = n),
            _ => return None,
        };
        Some(result)
    }
}

/// The polymorphic contract every concrete shape kind implements.
pub trait Shape: fmt::Debug {
    /// Stable identity assigned at creation.
    fn id(&self) -> ShapeId;

    /// Immutable tag identifying the concrete kind (registry key).
    fn type_tag(&self) -> &'static str;

    /// The anchor point; center or segment start depending on the kind.
    fn position(&self) -> Point;

    /// Rotation in degrees.
    fn rotation(&self) -> f64;

    /// Pure point-containment predicate used to resolve pointer targets.
    fn hit_test(&self, point: Point) -> bool;

    /// Axis-aligned box around the shape's extent. Every point passing
    /// [`Shape::hit_test`] lies within it, possibly touching the edge.
    fn bounding_box(&self) -> BoundingBox;

    /// Paints the shape (fill first, then stroke). Must not mutate shape
    /// state; each painter call carries its own style, so nothing leaks to
    /// sibling shapes.
    fn render(&self, painter: &mut Painter<'_>);

    /// Translates the anchor and all auxiliary points by `delta`.
    fn move_by(&mut self, delta: Point);

    /// The kind's own descriptor table (most derived level of the chain).
    fn own_attributes(&self) -> &'static [AttributeDescriptor];

    /// Inherited descriptor keys this kind suppresses from the merged view.
    /// Purely presentational; the underlying fields remain addressable.
    fn hidden_attributes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Reads the current value of the attribute `key`.
    fn get_attr(&self, key: &str) -> Option<AttrValue>;

    /// Writes the attribute `key`. A rejected write leaves the prior value
    /// intact.
    fn set_attr(&mut self, key: &str, value: AttrValue) -> Result<()>;

    /// The effective, ordered descriptor list for the property panel.
    ///
    /// A function of the concrete kind only, never of current field values:
    /// the kind's own table is merged over the generic shape level and the
    /// hidden-key set is applied.
    fn editable_attributes(&self) -> Vec<AttributeDescriptor> {
        merge_descriptors(
            &[self.own_attributes(), BASE_ATTRIBUTES],
            self.hidden_attributes(),
        )
    }
}

/// Error for an attribute key no level of the kind declares.
pub(crate) fn unknown_attribute(key: &str) -> EditorError {
    EditorError::UnknownAttribute {
        key: key.to_string(),
    }
}
