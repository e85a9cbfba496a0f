//! The decoded mass-edit request.

use massedit_core::{Attributes, FieldValue, RecordId};
use std::collections::BTreeMap;

use crate::action::MassAction;

/// Submitted settings for one field. They apply to every target alike.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    /// Whether the mass-change toggle was checked.
    pub active: bool,
    /// The action picked in the selector, if any.
    pub action: Option<MassAction>,
    /// The submitted value.
    pub new_value: FieldValue,
}

impl FieldChange {
    /// An active change with the default action.
    pub fn new(new_value: impl Into<FieldValue>) -> Self {
        Self {
            active: true,
            action: None,
            new_value: new_value.into(),
        }
    }

    pub fn with_action(mut self, action: MassAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Uncheck the toggle; everything else is then ignored.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Submitted rows for one inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineChange {
    pub active: bool,
    pub rows: Vec<Attributes>,
}

impl InlineChange {
    pub fn new(rows: Vec<Attributes>) -> Self {
        Self { active: true, rows }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// One submitted mass-edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassEditRequest {
    /// Model being edited.
    pub model: String,
    /// Selected records, without duplicates, in selection order.
    pub target_ids: Vec<RecordId>,
    /// Field settings by field name.
    pub fields: BTreeMap<String, FieldChange>,
    /// Inline settings by inline name.
    pub inlines: BTreeMap<String, InlineChange>,
}

impl MassEditRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Add a target record. Repeated ids are ignored.
    pub fn target(mut self, id: RecordId) -> Self {
        if !self.target_ids.contains(&id) {
            self.target_ids.push(id);
        }
        self
    }

    /// Add several target records.
    pub fn targets(self, ids: impl IntoIterator<Item = RecordId>) -> Self {
        ids.into_iter().fold(self, |request, id| request.target(id))
    }

    pub fn field(mut self, name: impl Into<String>, change: FieldChange) -> Self {
        self.fields.insert(name.into(), change);
        self
    }

    pub fn inline(mut self, name: impl Into<String>, change: InlineChange) -> Self {
        self.inlines.insert(name.into(), change);
        self
    }

    /// Returns true if at least one field or inline toggle is checked.
    pub fn has_active(&self) -> bool {
        self.fields.values().any(|c| c.active) || self.inlines.values().any(|c| c.active)
    }
}
