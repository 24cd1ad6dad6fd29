//! Scene store: the ordered shape collection and the current selection.
//!
//! Paint order is insertion order; hit resolution walks the same order in
//! reverse so visual stacking matches interaction precedence. The scene is
//! the single owner of its shapes.

use scenekit_core::{Point, Result};
use tracing::debug;

use crate::model::{Shape, ShapeId};
use crate::registry::ShapeRegistry;

#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Box<dyn Shape>>,
    selected: Option<ShapeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Appends a shape on top of the paint order and returns its id.
    pub fn add(&mut self, shape: Box<dyn Shape>) -> ShapeId {
        let id = shape.id();
        debug!(%id, tag = shape.type_tag(), "shape added");
        self.shapes.push(shape);
        id
    }

    /// Creates a shape of kind `tag` through the registry, with a freshly
    /// allocated id, and adds it on top.
    pub fn spawn(&mut self, registry: &ShapeRegistry, tag: &str, position: Point) -> Result<ShapeId> {
        let shape = registry.create(tag, ShapeId::new(), position)?;
        Ok(self.add(shape))
    }

    /// Removes and returns the shape with the given id. Clears the
    /// selection if it pointed at the removed shape.
    pub fn remove(&mut self, id: ShapeId) -> Option<Box<dyn Shape>> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(%id, "shape removed");
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: ShapeId) -> Option<&dyn Shape> {
        self.shapes.iter().find(|s| s.id() == id).map(|s| s.as_ref())
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut dyn Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.id() == id)
            .map(|s| &mut **s as &mut dyn Shape)
    }

    /// Iterates shapes in paint order (first added is painted first).
    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> {
        self.shapes.iter().map(|s| s.as_ref())
    }

    /// Resolves the topmost shape containing `point`, walking paint order
    /// in reverse so the visually frontmost shape wins.
    pub fn hit_test_top(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point))
            .map(|s| s.id())
    }

    /// Sets the selection. Selecting an id not present in the scene clears
    /// the selection instead.
    pub fn select(&mut self, id: Option<ShapeId>) {
        self.selected = id.filter(|id| self.shapes.iter().any(|s| s.id() == *id));
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rectangle;

    fn rect_at(x: f64, y: f64) -> Box<dyn Shape> {
        Box::new(Rectangle::new(ShapeId::new(), Point::new(x, y)))
    }

    #[test]
    fn paint_order_is_insertion_order() {
        let mut scene = Scene::new();
        let first = scene.add(rect_at(0.0, 0.0));
        let second = scene.add(rect_at(10.0, 10.0));
        let ids: Vec<_> = scene.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn topmost_shape_wins_hit_resolution() {
        let mut scene = Scene::new();
        let bottom = scene.add(rect_at(0.0, 0.0));
        let top = scene.add(rect_at(20.0, 0.0));
        // (20, 0) is covered by both rectangles; the later one wins.
        assert_eq!(scene.hit_test_top(Point::new(20.0, 0.0)), Some(top));
        // (-30, 0) only the bottom one covers.
        assert_eq!(scene.hit_test_top(Point::new(-30.0, 0.0)), Some(bottom));
        assert_eq!(scene.hit_test_top(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn removing_the_selected_shape_clears_selection() {
        let mut scene = Scene::new();
        let id = scene.add(rect_at(0.0, 0.0));
        scene.select(Some(id));
        assert_eq!(scene.selected_id(), Some(id));
        assert!(scene.remove(id).is_some());
        assert_eq!(scene.selected_id(), None);
        assert!(scene.remove(id).is_none());
    }

    #[test]
    fn selecting_a_foreign_id_clears_selection() {
        let mut scene = Scene::new();
        scene.add(rect_at(0.0, 0.0));
        scene.select(Some(ShapeId::new()));
        assert_eq!(scene.selected_id(), None);
    }

    #[test]
    fn spawn_goes_through_the_registry() {
        let registry = ShapeRegistry::with_builtin_kinds();
        let mut scene = Scene::new();
        let id = scene.spawn(&registry, "ellipse", Point::new(5.0, 5.0)).unwrap();
        let shape = scene.get(id).unwrap();
        assert_eq!(shape.type_tag(), "ellipse");
        assert_eq!(shape.position(), Point::new(5.0, 5.0));

        assert!(scene.spawn(&registry, "nope", Point::new(0.0, 0.0)).is_err());
        assert_eq!(scene.len(), 1);
    }
}
