//! Field descriptors.
//!
//! A descriptor is the host's description of one editable field, fixed for
//! the duration of a mass-edit request.

use crate::{RelationSet, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared kind of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form character data.
    Text,
    /// A value picked from a fixed set of choices.
    Choice,
    /// Integer or floating point number.
    Number,
    /// Single reference to another record.
    ForeignKey,
    /// Set of references to other records.
    ManyToMany,
    /// Anything else (dates, booleans, ...).
    Other,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Choice => "choice",
            Self::Number => "number",
            Self::ForeignKey => "foreign_key",
            Self::ManyToMany => "many_to_many",
            Self::Other => "other",
        }
    }

    /// Returns true if values of this kind are relation sets rather than scalars.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::ManyToMany)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one editable field, as supplied by the descriptor provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared kind.
    pub kind: FieldKind,
    /// Whether the field's widget spans several input controls.
    pub widget_is_composite: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            widget_is_composite: false,
        }
    }

    /// Mark the widget as composite.
    pub fn composite(mut self) -> Self {
        self.widget_is_composite = true;
        self
    }
}

/// A field's value as seen by the applicator: a scalar, or a relation set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(Value),
    Related(RelationSet),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            FieldValue::Scalar(v) => Some(v),
            FieldValue::Related(_) => None,
        }
    }

    pub fn as_related(&self) -> Option<&RelationSet> {
        match self {
            FieldValue::Related(set) => Some(set),
            FieldValue::Scalar(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Scalar(v) => v.type_name(),
            FieldValue::Related(_) => "RelationSet",
        }
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        FieldValue::Scalar(v)
    }
}

impl From<RelationSet> for FieldValue {
    fn from(set: RelationSet) -> Self {
        FieldValue::Related(set)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Scalar(Value::from(s))
    }
}
