//! Field-action resolution.
//!
//! Decides, from a field's kind and widget alone, which mass-change controls
//! the field offers. Current data never influences the outcome.

use crate::action::{ActionVocabulary, MassAction};
use crate::error::{MutationError, MutationResult};
use massedit_core::{FieldDescriptor, FieldKind};
use serde::Serialize;

/// The mass-change controls offered for one field or inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MassOptions {
    /// Whether the activation toggle is rendered. Always true.
    pub offer_toggle: bool,
    /// The action selector's vocabulary, if the field has one.
    pub vocabulary: Option<ActionVocabulary>,
}

impl MassOptions {
    /// Toggle only; an active field is replaced outright.
    pub fn toggle_only() -> Self {
        Self {
            offer_toggle: true,
            vocabulary: None,
        }
    }

    pub fn with_vocabulary(vocabulary: ActionVocabulary) -> Self {
        Self {
            offer_toggle: true,
            vocabulary: Some(vocabulary),
        }
    }

    /// Returns true if `action` may be requested for this field.
    pub fn allows(&self, action: MassAction) -> bool {
        match self.vocabulary {
            Some(vocabulary) => vocabulary.contains(action),
            None => action == MassAction::Replace,
        }
    }

    /// The action to apply given what was submitted.
    ///
    /// Without a submitted action the vocabulary's first entry is used, or
    /// Replace for toggle-only fields. A submitted action outside the
    /// vocabulary is rejected rather than mapped to another one.
    pub fn effective_action(
        &self,
        field: &str,
        requested: Option<MassAction>,
    ) -> MutationResult<MassAction> {
        let action = match (requested, self.vocabulary) {
            (Some(action), _) => action,
            (None, Some(vocabulary)) => vocabulary.default_action(),
            (None, None) => MassAction::Replace,
        };

        if !self.allows(action) {
            let allowed = self
                .vocabulary
                .map(|v| v.to_string())
                .unwrap_or_else(|| MassAction::Replace.code().to_string());
            return Err(MutationError::invalid_action(field, action, allowed));
        }

        Ok(action)
    }
}

/// Resolve the controls offered for a model field.
pub fn resolve(field: &FieldDescriptor) -> MassOptions {
    match (field.kind, field.widget_is_composite) {
        // A multi-control widget posts several keys, so the raw text cannot
        // be prefixed or suffixed as one string.
        (FieldKind::Text, false) => MassOptions::with_vocabulary(ActionVocabulary::Text),
        (FieldKind::ManyToMany, _) => MassOptions::with_vocabulary(ActionVocabulary::Multi),
        _ => MassOptions::toggle_only(),
    }
}

/// Resolve the controls offered for an inline (child collection).
pub fn resolve_inline() -> MassOptions {
    MassOptions::toggle_only()
}
