//! Pointer interaction: tool state, selection, and drag handling.
//!
//! The controller turns raw pointer events into scene operations. Press
//! resolves the topmost hit (or places a new shape when a place tool is
//! active) and starts a drag; move applies the incremental displacement
//! since the last sample through `move_by`; release ends the drag.

use scenekit_core::{Point, Result};
use tracing::debug;

use crate::model::ShapeId;
use crate::registry::ShapeRegistry;
use crate::scene::Scene;

/// The active editor tool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    /// Place a new shape of the tagged kind on the next press.
    Place(String),
}

/// Cursor feedback for the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Grab,
    Grabbing,
}

#[derive(Debug)]
struct DragState {
    target: ShapeId,
    last: Point,
}

/// Drag/selection state machine over a [`Scene`].
#[derive(Debug, Default)]
pub struct InteractionController {
    tool: Tool,
    drag: Option<DragState>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!(?tool, "tool changed");
        self.tool = tool;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Handles a pointer press at `point`.
    ///
    /// With the select tool: resolves the topmost hit, updates the
    /// selection (clearing it on a miss), and begins dragging the hit
    /// shape. With a place tool: creates the shape through the registry at
    /// the pointer, selects it, begins dragging it, and reverts to the
    /// select tool.
    ///
    /// Returns the id the press resolved to, if any. A place tool press
    /// with an unregistered tag fails and leaves the scene untouched.
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        registry: &ShapeRegistry,
        point: Point,
    ) -> Result<Option<ShapeId>> {
        let target = match &self.tool {
            Tool::Place(tag) => {
                let tag = tag.clone();
                let id = scene.spawn(registry, &tag, point)?;
                debug!(%id, %tag, "shape placed");
                self.tool = Tool::Select;
                Some(id)
            }
            Tool::Select => scene.hit_test_top(point),
        };

        scene.select(target);
        self.drag = target.map(|id| DragState {
            target: id,
            last: point,
        });
        Ok(target)
    }

    /// Handles pointer movement. While dragging, translates the target by
    /// the displacement since the last sample; otherwise reports a hover
    /// hint.
    pub fn pointer_move(&mut self, scene: &mut Scene, point: Point) -> CursorHint {
        if let Some(drag) = &mut self.drag {
            if let Some(shape) = scene.get_mut(drag.target) {
                shape.move_by(point - drag.last);
            }
            drag.last = point;
            return CursorHint::Grabbing;
        }
        if scene.hit_test_top(point).is_some() {
            CursorHint::Grab
        } else {
            CursorHint::Default
        }
    }

    /// Handles pointer release, ending any drag.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Scene, ShapeRegistry, InteractionController) {
        (
            Scene::new(),
            ShapeRegistry::with_builtin_kinds(),
            InteractionController::new(),
        )
    }

    #[test]
    fn press_selects_topmost_and_miss_clears() {
        let (mut scene, registry, mut input) = setup();
        let bottom = scene.spawn(&registry, "rect", Point::new(0.0, 0.0)).unwrap();
        let top = scene.spawn(&registry, "rect", Point::new(20.0, 0.0)).unwrap();

        let hit = input
            .pointer_down(&mut scene, &registry, Point::new(20.0, 0.0))
            .unwrap();
        assert_eq!(hit, Some(top));
        assert_eq!(scene.selected_id(), Some(top));

        input.pointer_up();
        let hit = input
            .pointer_down(&mut scene, &registry, Point::new(-30.0, 0.0))
            .unwrap();
        assert_eq!(hit, Some(bottom));

        input.pointer_up();
        input
            .pointer_down(&mut scene, &registry, Point::new(900.0, 900.0))
            .unwrap();
        assert_eq!(scene.selected_id(), None);
        assert!(!input.is_dragging());
    }

    #[test]
    fn drag_applies_incremental_deltas() {
        let (mut scene, registry, mut input) = setup();
        let id = scene.spawn(&registry, "ellipse", Point::new(100.0, 100.0)).unwrap();

        input
            .pointer_down(&mut scene, &registry, Point::new(100.0, 100.0))
            .unwrap();
        assert_eq!(
            input.pointer_move(&mut scene, Point::new(110.0, 100.0)),
            CursorHint::Grabbing
        );
        input.pointer_move(&mut scene, Point::new(110.0, 130.0));
        input.pointer_up();

        let shape = scene.get(id).unwrap();
        assert_eq!(shape.position(), Point::new(110.0, 130.0));
    }

    #[test]
    fn hover_hints_without_drag() {
        let (mut scene, registry, mut input) = setup();
        scene.spawn(&registry, "rect", Point::new(0.0, 0.0)).unwrap();
        assert_eq!(
            input.pointer_move(&mut scene, Point::new(0.0, 0.0)),
            CursorHint::Grab
        );
        assert_eq!(
            input.pointer_move(&mut scene, Point::new(500.0, 500.0)),
            CursorHint::Default
        );
    }

    #[test]
    fn place_tool_creates_selects_and_reverts() {
        let (mut scene, registry, mut input) = setup();
        input.set_tool(Tool::Place("line".to_string()));

        let id = input
            .pointer_down(&mut scene, &registry, Point::new(30.0, 40.0))
            .unwrap()
            .unwrap();
        assert_eq!(scene.selected_id(), Some(id));
        assert_eq!(scene.get(id).unwrap().position(), Point::new(30.0, 40.0));
        assert_eq!(input.tool(), &Tool::Select);
        assert!(input.is_dragging());
    }

    #[test]
    fn place_tool_with_unknown_tag_leaves_scene_untouched() {
        let (mut scene, registry, mut input) = setup();
        input.set_tool(Tool::Place("hexagon".to_string()));
        assert!(input
            .pointer_down(&mut scene, &registry, Point::new(0.0, 0.0))
            .is_err());
        assert!(scene.is_empty());
        assert_eq!(scene.selected_id(), None);
    }
}
