//! Error handling for SceneKit
//!
//! The editor core is total over well-formed inputs: geometry queries never
//! fail, and degenerate shapes (e.g. a zero-length line segment) are handled
//! locally. The only caller-visible failures are registry lookup misses and
//! rejected attribute edits.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Editor error type
///
/// Represents errors raised at the boundaries of the editor core:
/// shape creation through the type registry and attribute edits
/// coming from the property panel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// No factory is registered for the requested shape type tag.
    ///
    /// Fatal to the create call; no shape is partially constructed.
    #[error("Unknown shape type: {tag}")]
    UnknownShapeType {
        /// The type tag that was requested.
        tag: String,
    },

    /// An attribute edit was rejected.
    ///
    /// Recoverable: the edit is not applied and the prior value is retained.
    #[error("Invalid value for attribute '{key}': {reason}")]
    InvalidAttributeValue {
        /// The attribute key the edit targeted.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The shape has no attribute with the given key.
    #[error("Unknown attribute: {key}")]
    UnknownAttribute {
        /// The attribute key that was requested.
        key: String,
    },
}

/// Result type alias using [`EditorError`].
pub type Result<T> = std::result::Result<T, EditorError>;
