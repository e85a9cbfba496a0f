//! RegistryBuilder for constructing an immutable Registry.

use crate::{FieldDef, InlineDef, ModelDef, Registry};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate model name: {0}")]
    DuplicateModelName(String),

    #[error("Duplicate field name: {field} on model {model}")]
    DuplicateFieldName { model: String, field: String },

    #[error("Duplicate inline name: {inline} on model {model}")]
    DuplicateInlineName { model: String, inline: String },

    #[error("Cannot exclude unknown field: {field} on model {model}")]
    UnknownExcludedField { model: String, field: String },

    #[error("Field {model}.{field} relates to unknown model: {related}")]
    UnknownRelatedModel {
        model: String,
        field: String,
        related: String,
    },
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Models being built, in declaration order.
    models: Vec<ModelDef>,
    /// Model name to position mapping.
    model_names: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model definition.
    pub fn add_model(&mut self, name: impl Into<String>) -> ModelBuilder<'_> {
        ModelBuilder {
            builder: self,
            name: name.into(),
            fields: Vec::new(),
            inlines: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        // Relations must point at declared models
        for model in &self.models {
            let columns = model.inlines.iter().flat_map(|i| i.columns.iter());
            for field in model.fields.iter().chain(columns) {
                if let Some(related) = &field.related_model {
                    if !self.model_names.contains_key(related) {
                        return Err(RegistryError::UnknownRelatedModel {
                            model: model.name.clone(),
                            field: field.name.clone(),
                            related: related.clone(),
                        });
                    }
                }
            }
        }

        tracing::debug!(models = self.models.len(), "registry built");

        let models = self
            .models
            .into_iter()
            .map(|m| (m.name.clone(), m))
            .collect();
        Ok(Registry::new(models))
    }
}

/// Builder for a model definition.
pub struct ModelBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    fields: Vec<FieldDef>,
    inlines: Vec<InlineDef>,
    excluded: Vec<String>,
}

impl<'a> ModelBuilder<'a> {
    /// Add a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add an inline (child collection).
    pub fn inline(mut self, inline: InlineDef) -> Self {
        self.inlines.push(inline);
        self
    }

    /// Hide a field from the admin form.
    pub fn exclude(mut self, field_name: impl Into<String>) -> Self {
        self.excluded.push(field_name.into());
        self
    }

    /// Finish building this model.
    pub fn done(self) -> Result<(), RegistryError> {
        // Check for duplicate name
        if self.builder.model_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateModelName(self.name));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(RegistryError::DuplicateFieldName {
                    model: self.name,
                    field: field.name.clone(),
                });
            }
        }

        let mut seen_inlines = HashSet::new();
        for inline in &self.inlines {
            if !seen_inlines.insert(inline.name.as_str()) {
                return Err(RegistryError::DuplicateInlineName {
                    model: self.name,
                    inline: inline.name.clone(),
                });
            }
        }

        for excluded in &self.excluded {
            if !seen.contains(excluded.as_str()) {
                return Err(RegistryError::UnknownExcludedField {
                    model: self.name,
                    field: excluded.clone(),
                });
            }
        }

        let model_def = ModelDef {
            name: self.name.clone(),
            fields: self.fields,
            inlines: self.inlines,
            excluded: self.excluded.into_iter().collect(),
        };

        let position = self.builder.models.len();
        self.builder.model_names.insert(self.name, position);
        self.builder.models.push(model_def);

        Ok(())
    }
}
