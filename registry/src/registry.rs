//! The Registry - immutable model lookup.

use crate::{FieldDef, InlineDef, ModelDef};
use massedit_core::FieldDescriptor;
use std::collections::HashMap;

/// The Registry provides runtime lookup of model definitions.
/// It is immutable after construction.
#[derive(Debug)]
pub struct Registry {
    /// Model definitions by name.
    models: HashMap<String, ModelDef>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(models: HashMap<String, ModelDef>) -> Self {
        Self { models }
    }

    /// Get a model definition by name.
    pub fn get_model(&self, name: &str) -> Option<&ModelDef> {
        self.models.get(name)
    }

    /// Check if a model exists.
    pub fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// All model names, sorted.
    pub fn model_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.models.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get an editable field of a model.
    pub fn get_field(&self, model: &str, field: &str) -> Option<&FieldDef> {
        self.get_model(model)
            .and_then(|m| m.get_editable_field(field))
    }

    /// Get an inline of a model.
    pub fn get_inline(&self, model: &str, inline: &str) -> Option<&InlineDef> {
        self.get_model(model).and_then(|m| m.get_inline(inline))
    }

    /// Descriptors of a model's editable fields, in declaration order.
    /// Unknown models yield no descriptors.
    pub fn descriptors(&self, model: &str) -> Vec<FieldDescriptor> {
        self.get_model(model)
            .map(|m| m.editable_fields().map(FieldDef::descriptor).collect())
            .unwrap_or_default()
    }

    /// Names of a model's inlines, in declaration order.
    pub fn inline_names(&self, model: &str) -> Vec<&str> {
        self.get_model(model)
            .map(|m| m.inlines.iter().map(|i| i.name.as_str()).collect())
            .unwrap_or_default()
    }
}
