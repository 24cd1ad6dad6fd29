//! # SceneKit
//!
//! An interactive 2D scene editor core: place, select, drag, and edit
//! geometric shapes, with a metadata-driven property panel.
//!
//! ## Architecture
//!
//! SceneKit is organized as a workspace:
//!
//! 1. **scenekit-core** - Geometry value types, colors, error taxonomy
//! 2. **scenekit-editor** - Shape model, attribute metadata, type registry,
//!    scene store, interaction, renderer
//! 3. **scenekit** - Integration crate with logging setup and the demo
//!    binary

pub use scenekit_core::{BoundingBox, Color, EditorError, Point, Result};
pub use scenekit_editor::{
    apply_edit, inspect, render_scene, render_to_image, AttrKind, AttrValue, AttributeDescriptor,
    CursorHint, Ellipse, FieldHandler, FieldRegistry, InteractionController, Line, Painter,
    PropertyEntry, Rectangle, Scene, Shape, ShapeFactory, ShapeId, ShapeRegistry, Tool,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, `RUST_LOG` environment
/// variable support, and INFO as the default level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
