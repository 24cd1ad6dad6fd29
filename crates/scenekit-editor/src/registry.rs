//! Shape type registry.
//!
//! Maps a type tag to a factory producing a default-configured shape, so
//! new kinds can be added without touching existing code. The registry is
//! an explicit object built at startup; nothing registers itself at import
//! time, which keeps registration order deterministic and testable.

use std::collections::HashMap;

use scenekit_core::{EditorError, Point, Result};
use tracing::debug;

use crate::model::{Ellipse, Line, Rectangle, Shape, ShapeId};
use crate::model::{ellipse::ELLIPSE_TAG, line::LINE_TAG, rectangle::RECTANGLE_TAG};

/// Constructs a shape of one kind with kind-specific defaults.
pub type ShapeFactory = Box<dyn Fn(ShapeId, Point) -> Box<dyn Shape>>;

/// Registry of shape kinds keyed by type tag.
#[derive(Default)]
pub struct ShapeRegistry {
    factories: HashMap<String, ShapeFactory>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in kinds (rectangle, ellipse,
    /// line) registered.
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        registry.register(RECTANGLE_TAG, Box::new(|id, pos| Box::new(Rectangle::new(id, pos))));
        registry.register(ELLIPSE_TAG, Box::new(|id, pos| Box::new(Ellipse::new(id, pos))));
        registry.register(LINE_TAG, Box::new(|id, pos| Box::new(Line::new(id, pos))));
        registry
    }

    /// Stores `factory` under `tag`. Re-registering a tag silently
    /// overwrites the previous factory (last write wins), which is how
    /// late-loaded kinds replace defaults without central coordination.
    pub fn register(&mut self, tag: impl Into<String>, factory: ShapeFactory) {
        let tag = tag.into();
        if self.factories.insert(tag.clone(), factory).is_some() {
            debug!(%tag, "shape factory replaced");
        } else {
            debug!(%tag, "shape factory registered");
        }
    }

    /// Constructs a new shape of the kind registered under `tag`.
    ///
    /// Fails with [`EditorError::UnknownShapeType`] when no factory is
    /// registered; nothing is partially constructed in that case.
    pub fn create(&self, tag: &str, id: ShapeId, position: Point) -> Result<Box<dyn Shape>> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| EditorError::UnknownShapeType {
                tag: tag.to_string(),
            })?;
        Ok(factory(id, position))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Enumerates the registered tags, e.g. for a shape-creation toolbar.
    /// Order is not significant.
    pub fn registered_tags(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeRegistry")
            .field("tags", &self.registered_tags())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_fails_without_constructing() {
        let registry = ShapeRegistry::with_builtin_kinds();
        let err = registry
            .create("unknown-tag", ShapeId::new(), Point::new(0.0, 0.0))
            .unwrap_err();
        assert_eq!(
            err,
            EditorError::UnknownShapeType {
                tag: "unknown-tag".to_string()
            }
        );
    }

    #[test]
    fn creates_rectangle_with_defaults() {
        let registry = ShapeRegistry::with_builtin_kinds();
        let shape = registry
            .create("rect", ShapeId::new(), Point::new(10.0, 10.0))
            .unwrap();
        let bb = shape.bounding_box();
        assert_eq!((bb.min_x, bb.min_y, bb.max_x, bb.max_y), (-40.0, -30.0, 60.0, 50.0));
    }

    #[test]
    fn built_in_tags_are_registered() {
        let registry = ShapeRegistry::with_builtin_kinds();
        let mut tags = registry.registered_tags();
        tags.sort_unstable();
        assert_eq!(tags, vec!["ellipse", "line", "rect"]);
        assert!(registry.contains("line"));
    }

    #[test]
    fn re_registration_overwrites() {
        let mut registry = ShapeRegistry::with_builtin_kinds();
        // Replace the rectangle factory with one producing a wide default.
        registry.register(
            "rect",
            Box::new(|id, pos| Box::new(Rectangle::new(id, pos).with_size(200.0, 10.0))),
        );
        let shape = registry
            .create("rect", ShapeId::new(), Point::new(0.0, 0.0))
            .unwrap();
        assert_eq!(shape.bounding_box().width(), 200.0);
        // Still exactly one "rect" entry.
        assert_eq!(
            registry
                .registered_tags()
                .iter()
                .filter(|t| **t == "rect")
                .count(),
            1
        );
    }
}
