//! Model definition types.

use massedit_core::{FieldDescriptor, FieldKind, Value};
use std::collections::HashSet;

/// One allowed value of a Choice field.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Stored value.
    pub value: Value,
    /// Human-readable label.
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Field definition within a model.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Declared kind.
    pub kind: FieldKind,
    /// Display label (defaults to the name).
    pub label: Option<String>,
    /// Whether the field is rendered with a multi-control widget.
    pub composite_widget: bool,
    /// Whether the field accepts null.
    pub nullable: bool,
    /// Allowed values (Choice fields).
    pub choices: Vec<Choice>,
    /// Target model (ForeignKey and ManyToMany fields).
    pub related_model: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            composite_widget: false,
            nullable: false,
            choices: Vec::new(),
            related_model: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Other)
    }

    pub fn choice(name: impl Into<String>, choices: Vec<Choice>) -> Self {
        let mut def = Self::new(name, FieldKind::Choice);
        def.choices = choices;
        def
    }

    pub fn foreign_key(name: impl Into<String>, model: impl Into<String>) -> Self {
        let mut def = Self::new(name, FieldKind::ForeignKey);
        def.related_model = Some(model.into());
        def
    }

    pub fn many_to_many(name: impl Into<String>, model: impl Into<String>) -> Self {
        let mut def = Self::new(name, FieldKind::ManyToMany);
        def.related_model = Some(model.into());
        def
    }

    pub fn composite(mut self) -> Self {
        self.composite_widget = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Display label, falling back to the field name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// The descriptor handed to the resolver.
    pub fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name.clone(),
            kind: self.kind,
            widget_is_composite: self.composite_widget,
        }
    }
}

/// A child collection edited alongside its parent (e.g. a "through" table).
#[derive(Debug, Clone)]
pub struct InlineDef {
    /// Inline name, also the prefix of its row controls.
    pub name: String,
    /// Columns of each child row.
    pub columns: Vec<FieldDef>,
}

impl InlineDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, column: FieldDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Get a column definition by name.
    pub fn get_column(&self, name: &str) -> Option<&FieldDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Model definition.
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Model name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// Inlines in declaration order.
    pub inlines: Vec<InlineDef>,
    /// Fields hidden from the admin form.
    pub excluded: HashSet<String>,
}

impl ModelDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            inlines: Vec::new(),
            excluded: HashSet::new(),
        }
    }

    /// Get a field definition by name, excluded or not.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field definition by name if it is editable.
    pub fn get_editable_field(&self, name: &str) -> Option<&FieldDef> {
        if self.excluded.contains(name) {
            return None;
        }
        self.get_field(name)
    }

    /// Editable fields in declaration order.
    pub fn editable_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .filter(|f| !self.excluded.contains(&f.name))
    }

    /// Get an inline definition by name.
    pub fn get_inline(&self, name: &str) -> Option<&InlineDef> {
        self.inlines.iter().find(|i| i.name == name)
    }
}
