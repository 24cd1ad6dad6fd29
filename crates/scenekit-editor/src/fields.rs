//! Field handlers: the coercion/validation/formatting boundary between the
//! property panel and the shape model.
//!
//! Each [`AttrKind`] has a handler implementing the strategy contract:
//! `coerce` turns raw UI input into a typed value (or `None` when
//! unparseable), `validate` checks it against the descriptor's bounds, and
//! `format` renders it back for display. [`apply_edit`] chains the three
//! with [`crate::model::Shape::set_attr`]; any failure rejects the edit and
//! the prior value is retained.

use std::collections::HashMap;

use scenekit_core::{Color, EditorError, Result};
use serde::Serialize;
use tracing::debug;

use crate::model::Shape;
use crate::properties::{AttrKind, AttrValue, AttributeDescriptor};

/// Strategy for one attribute kind.
pub trait FieldHandler {
    /// The attribute kind this handler serves.
    fn kind(&self) -> AttrKind;

    /// Parses raw UI input. `None` means unparseable.
    fn coerce(&self, raw: &str) -> Option<AttrValue>;

    /// Checks a coerced value against the descriptor's constraints.
    /// Returns an error message on failure.
    fn validate(&self, value: &AttrValue, descriptor: &AttributeDescriptor) -> Option<String>;

    /// Formats a value for display.
    fn format(&self, value: &AttrValue) -> String;
}

/// Numeric fields: parses `f64`, enforces `min`/`max`, prints integers
/// bare and everything else with two decimals.
pub struct NumberField;

impl FieldHandler for NumberField {
    fn kind(&self) -> AttrKind {
        AttrKind::Number
    }

    fn coerce(&self, raw: &str) -> Option<AttrValue> {
        raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()).map(AttrValue::Number)
    }

    fn validate(&self, value: &AttrValue, descriptor: &AttributeDescriptor) -> Option<String> {
        let AttrValue::Number(n) = value else {
            return Some("expected a number".to_string());
        };
        if let Some(min) = descriptor.min {
            if *n < min {
                return Some(format!("minimum is {}", min));
            }
        }
        if let Some(max) = descriptor.max {
            if *n > max {
                return Some(format!("maximum is {}", max));
            }
        }
        None
    }

    fn format(&self, value: &AttrValue) -> String {
        match value {
            AttrValue::Number(n) if n.fract() == 0.0 => format!("{}", n),
            AttrValue::Number(n) => format!("{:.2}", n),
            _ => String::new(),
        }
    }
}

/// Color fields: `#RRGGBB` only.
pub struct ColorField;

impl FieldHandler for ColorField {
    fn kind(&self) -> AttrKind {
        AttrKind::Color
    }

    fn coerce(&self, raw: &str) -> Option<AttrValue> {
        Color::from_hex(raw.trim()).map(AttrValue::Color)
    }

    fn validate(&self, value: &AttrValue, _descriptor: &AttributeDescriptor) -> Option<String> {
        match value {
            AttrValue::Color(_) => None,
            _ => Some("expected a #RRGGBB color".to_string()),
        }
    }

    fn format(&self, value: &AttrValue) -> String {
        match value {
            AttrValue::Color(c) => c.to_hex(),
            _ => String::new(),
        }
    }
}

/// Registry of field handlers keyed by attribute kind.
#[derive(Default)]
pub struct FieldRegistry {
    handlers: HashMap<AttrKind, Box<dyn FieldHandler>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in number and color handlers.
    pub fn with_builtin_fields() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NumberField));
        registry.register(Box::new(ColorField));
        registry
    }

    /// Registers a handler under its kind, replacing any previous one.
    pub fn register(&mut self, handler: Box<dyn FieldHandler>) {
        self.handlers.insert(handler.kind(), handler);
    }

    pub fn get(&self, kind: AttrKind) -> Option<&dyn FieldHandler> {
        self.handlers.get(&kind).map(|h| h.as_ref())
    }
}

/// One row of the property panel: the descriptor, the current value, and
/// its display string.
#[derive(Debug, Serialize)]
pub struct PropertyEntry {
    pub descriptor: AttributeDescriptor,
    pub value: Option<AttrValue>,
    pub display: String,
}

/// Builds the panel form for a shape: the merged descriptor list paired
/// with the current values, read reflectively by key.
pub fn inspect(shape: &dyn Shape, fields: &FieldRegistry) -> Vec<PropertyEntry> {
    shape
        .editable_attributes()
        .into_iter()
        .map(|descriptor| {
            let value = shape.get_attr(descriptor.key);
            let display = match (&value, fields.get(descriptor.kind)) {
                (Some(v), Some(handler)) => handler.format(v),
                _ => String::new(),
            };
            PropertyEntry {
                descriptor,
                value,
                display,
            }
        })
        .collect()
}

/// Applies one edit from the panel: coerce the raw input, validate it
/// against the descriptor, then write through `set_attr`.
///
/// Every failure path returns an error without touching the shape, so a
/// rejected edit keeps the prior value.
pub fn apply_edit(
    shape: &mut dyn Shape,
    fields: &FieldRegistry,
    key: &str,
    raw: &str,
) -> Result<()> {
    let descriptor = shape
        .editable_attributes()
        .into_iter()
        .find(|d| d.key == key)
        .ok_or_else(|| EditorError::UnknownAttribute {
            key: key.to_string(),
        })?;

    if descriptor.readonly {
        return Err(EditorError::InvalidAttributeValue {
            key: key.to_string(),
            reason: "attribute is read-only".to_string(),
        });
    }

    let handler = fields
        .get(descriptor.kind)
        .ok_or_else(|| EditorError::InvalidAttributeValue {
            key: key.to_string(),
            reason: format!("no field handler for {:?}", descriptor.kind),
        })?;

    let value = handler
        .coerce(raw)
        .ok_or_else(|| EditorError::InvalidAttributeValue {
            key: key.to_string(),
            reason: format!("cannot parse '{}'", raw),
        })?;

    if let Some(message) = handler.validate(&value, &descriptor) {
        return Err(EditorError::InvalidAttributeValue {
            key: key.to_string(),
            reason: message,
        });
    }

    debug!(key, raw, "applying attribute edit");
    shape.set_attr(key, value)
}
