//! Attribute metadata for the generic property panel.
//!
//! Each shape kind declares a static table of [`AttributeDescriptor`]s for
//! its own fields. The panel never inspects shape values to build its form;
//! it merges the kind's descriptor chain (most derived level first, the
//! generic shape level last) and filters out hidden keys. A key re-declared
//! at a more derived level overrides the inherited descriptor instead of
//! duplicating it.

use scenekit_core::{Color, EditorError, Result};
use serde::Serialize;

/// Which editor widget a field should be presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrKind {
    Number,
    Text,
    Color,
    Boolean,
    Select,
}

/// One choice of a [`AttrKind::Select`] attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Declarative description of one editable field.
///
/// Descriptors are static per shape kind, not per instance: they say how to
/// present and validate a field, never what its current value is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: AttrKind,
    pub readonly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [SelectOption]>,
}

impl AttributeDescriptor {
    pub const fn new(key: &'static str, label: &'static str, kind: AttrKind) -> Self {
        Self {
            key,
            label,
            kind,
            readonly: false,
            min: None,
            max: None,
            step: None,
            hidden: false,
            options: None,
        }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, AttrKind::Number)
    }

    pub const fn color(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, AttrKind::Color)
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub const fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Descriptors of the generic shape level, shared by every kind.
///
/// Kinds whose anchor semantics make raw x/y editing misleading (e.g. a
/// line exposing start/end coordinates instead) suppress entries with their
/// hidden-key set; the underlying fields remain.
pub const BASE_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::number("x", "Position X"),
    AttributeDescriptor::number("y", "Position Y"),
    AttributeDescriptor::number("rotation", "Rotation")
        .with_min(0.0)
        .with_max(360.0),
];

/// A reflective attribute value, the envelope passed through
/// `get_attr`/`set_attr` and the field-handler boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Text(String),
    Color(Color),
    Bool(bool),
}

impl AttrValue {
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Number(_) => AttrKind::Number,
            AttrValue::Text(_) => AttrKind::Text,
            AttrValue::Color(_) => AttrKind::Color,
            AttrValue::Bool(_) => AttrKind::Boolean,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            AttrValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

/// Extracts a number from `value` or rejects the edit.
pub fn expect_number(key: &str, value: &AttrValue) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| EditorError::InvalidAttributeValue {
            key: key.to_string(),
            reason: "expected a number".to_string(),
        })
}

/// Extracts a color from `value` or rejects the edit.
pub fn expect_color(key: &str, value: &AttrValue) -> Result<Color> {
    value
        .as_color()
        .ok_or_else(|| EditorError::InvalidAttributeValue {
            key: key.to_string(),
            reason: "expected a #RRGGBB color".to_string(),
        })
}

/// Merges descriptor levels into the effective list for one kind.
///
/// `levels` is ordered most derived first; the generic shape level comes
/// last. The first level to declare a key wins, so a re-declaration at a
/// derived level overrides the inherited descriptor. Output order is the
/// stable documented order: own attributes first, inherited after. After
/// the merge, keys in `hidden` and descriptors marked `hidden` are dropped.
pub fn merge_descriptors(
    levels: &[&[AttributeDescriptor]],
    hidden: &[&str],
) -> Vec<AttributeDescriptor> {
    let mut merged: Vec<AttributeDescriptor> = Vec::new();
    for level in levels {
        for desc in *level {
            if merged.iter().all(|d| d.key != desc.key) {
                merged.push(*desc);
            }
        }
    }
    merged.retain(|d| !d.hidden && !hidden.contains(&d.key));
    merged
}
