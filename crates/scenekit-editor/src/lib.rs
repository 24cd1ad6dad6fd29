//! # SceneKit Editor
//!
//! The editor core of SceneKit: an interactive 2D scene of geometric
//! shapes with a generic, metadata-driven property panel.
//!
//! ## Core Components
//!
//! - **Shape model**: the object-safe [`model::Shape`] contract (identity,
//!   hit-testing, bounding box, rendering, translation) implemented by the
//!   built-in rectangle, ellipse, and line kinds.
//! - **Attribute metadata**: static per-kind descriptor tables merged along
//!   the kind's chain with override and hide rules, so the panel can edit
//!   any shape without per-kind UI code.
//! - **Type registry**: tag-to-factory mapping that keeps the kind set
//!   open; unknown tags fail creation explicitly.
//! - **Field handlers**: coercion/validation/formatting strategies for each
//!   attribute kind, the write path of the panel.
//! - **Scene store**: the ordered shape collection and selection; paint
//!   order is insertion order, hit resolution walks it in reverse.
//! - **Interaction**: tool state and drag handling over the scene.
//! - **Renderer**: tiny-skia painting of shapes and the selection outline.
//!
//! ## Usage
//!
//! ```rust
//! use scenekit_core::Point;
//! use scenekit_editor::registry::ShapeRegistry;
//! use scenekit_editor::scene::Scene;
//!
//! let registry = ShapeRegistry::with_builtin_kinds();
//! let mut scene = Scene::new();
//! let id = scene.spawn(&registry, "rect", Point::new(60.0, 40.0)).unwrap();
//! scene.select(Some(id));
//! assert_eq!(scene.hit_test_top(Point::new(60.0, 40.0)), Some(id));
//! ```

pub mod fields;
pub mod interaction;
pub mod model;
pub mod properties;
pub mod registry;
pub mod render;
pub mod scene;

pub use fields::{apply_edit, inspect, FieldHandler, FieldRegistry, PropertyEntry};
pub use interaction::{CursorHint, InteractionController, Tool};
pub use model::{Ellipse, Line, Rectangle, Shape, ShapeCommon, ShapeId, HIT_TOLERANCE};
pub use properties::{AttrKind, AttrValue, AttributeDescriptor, SelectOption};
pub use registry::{ShapeFactory, ShapeRegistry};
pub use render::{render_scene, render_to_image, Painter};
pub use scene::Scene;
