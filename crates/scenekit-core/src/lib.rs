//! # SceneKit Core
//!
//! Core types for the SceneKit editor: 2D geometry value types,
//! an RGB color with `#RRGGBB` parsing, and the shared error taxonomy.

pub mod error;
pub mod geometry;
pub mod style;

pub use error::{EditorError, Result};
pub use geometry::{BoundingBox, Point};
pub use style::Color;
