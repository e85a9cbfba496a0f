//! Mass-edit result types.

use massedit_core::RecordId;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::action::MassAction;

/// Outcome of applying one field across the targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOutcome {
    /// Field name.
    pub field: String,
    /// Action that was applied.
    pub action: MassAction,
    /// Targets whose stored value actually changed.
    pub changed: Vec<RecordId>,
}

/// Outcome of an executed mass-edit request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MassEditOutcome {
    /// Targets the request was applied to.
    pub targets: Vec<RecordId>,
    /// Applied fields, in application order.
    pub fields: Vec<FieldOutcome>,
    /// Inlines whose child rows were replaced.
    pub inlines: Vec<String>,
    /// Submitted fields and inlines left alone because their toggle was off.
    pub skipped: Vec<String>,
}

impl MassEditOutcome {
    /// Returns true if nothing was applied.
    pub fn is_noop(&self) -> bool {
        self.fields.is_empty() && self.inlines.is_empty()
    }

    /// Outcome for one field, if it was applied.
    pub fn field(&self, name: &str) -> Option<&FieldOutcome> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// Number of targets changed for one field.
    pub fn changed_count(&self, name: &str) -> usize {
        self.field(name).map(|f| f.changed.len()).unwrap_or(0)
    }

    /// Every target with at least one changed field.
    pub fn changed_records(&self) -> BTreeSet<RecordId> {
        self.fields
            .iter()
            .flat_map(|f| f.changed.iter().copied())
            .collect()
    }
}
