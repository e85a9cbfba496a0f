//! Per-model mass-change form controls.
//!
//! The form is built once per model from the registry's field definitions
//! and the resolver's decision for each. Renderers read it as data.

use massedit_core::FieldKind;
use massedit_mutation::{resolve, resolve_inline, MassOptions};
use massedit_registry::{FieldDef, InlineDef, Registry};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::{FormError, FormResult};
use crate::names;

/// The activation checkbox.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toggle {
    pub name: String,
    pub label: &'static str,
}

impl Toggle {
    fn new(name: &str) -> Self {
        Self {
            name: names::toggle_name(name),
            label: names::TOGGLE_LABEL,
        }
    }
}

/// One option of the action selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionChoice {
    pub code: &'static str,
    pub label: &'static str,
}

/// The action selector, present only for fields with a vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSelect {
    pub name: String,
    pub label: &'static str,
    pub choices: Vec<ActionChoice>,
    /// Code selected when the form is first rendered.
    pub initial: &'static str,
}

/// Controls offered for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldControls {
    pub field: String,
    pub label: String,
    pub kind: FieldKind,
    pub toggle: Toggle,
    pub action: Option<ActionSelect>,
}

impl FieldControls {
    fn new(def: &FieldDef) -> Self {
        let options = resolve(&def.descriptor());
        Self {
            field: def.name.clone(),
            label: def.label().to_string(),
            kind: def.kind,
            toggle: Toggle::new(&def.name),
            action: action_select(&def.name, &options),
        }
    }
}

/// Controls offered for one inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineControls {
    pub inline: String,
    pub toggle: Toggle,
    pub action: Option<ActionSelect>,
    pub columns: Vec<String>,
}

impl InlineControls {
    fn new(def: &InlineDef) -> Self {
        let options = resolve_inline();
        Self {
            inline: def.name.clone(),
            toggle: Toggle::new(&def.name),
            action: action_select(&def.name, &options),
            columns: def.columns.iter().map(|c| c.name.clone()).collect(),
        }
    }
}

fn action_select(field: &str, options: &MassOptions) -> Option<ActionSelect> {
    let vocabulary = options.vocabulary?;
    Some(ActionSelect {
        name: names::action_name(field),
        label: names::ACTION_LABEL,
        choices: vocabulary
            .choices()
            .into_iter()
            .map(|(code, label)| ActionChoice { code, label })
            .collect(),
        initial: vocabulary.default_action().code(),
    })
}

/// All mass-change controls of a model's form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassOptionsForm {
    pub model: String,
    /// Editable fields, in declaration order.
    pub fields: Vec<FieldControls>,
    pub inlines: Vec<InlineControls>,
}

impl MassOptionsForm {
    /// Build the form for a registered model.
    pub fn for_model(registry: &Registry, model: &str) -> FormResult<Self> {
        let def = registry
            .get_model(model)
            .ok_or_else(|| FormError::unknown_model(model))?;

        let form = Self {
            model: def.name.clone(),
            fields: def.editable_fields().map(FieldControls::new).collect(),
            inlines: def.inlines.iter().map(InlineControls::new).collect(),
        };

        tracing::debug!(
            model,
            fields = form.fields.len(),
            inlines = form.inlines.len(),
            "mass options form built"
        );
        Ok(form)
    }

    pub fn field(&self, name: &str) -> Option<&FieldControls> {
        self.fields.iter().find(|f| f.field == name)
    }

    pub fn inline(&self, name: &str) -> Option<&InlineControls> {
        self.inlines.iter().find(|i| i.inline == name)
    }

    /// Names of every mass-change control on the form.
    pub fn control_names(&self) -> BTreeSet<&str> {
        let fields = self.fields.iter().flat_map(|f| {
            std::iter::once(f.toggle.name.as_str()).chain(f.action.as_ref().map(|a| a.name.as_str()))
        });
        let inlines = self.inlines.iter().map(|i| i.toggle.name.as_str());
        fields.chain(inlines).collect()
    }
}
