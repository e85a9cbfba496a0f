//! Mutation error types.

use crate::action::MassAction;
use massedit_core::{FieldKind, RecordId, StoreError};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mass-edit resolution and execution.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("Unknown model: {name}")]
    UnknownModel { name: String },

    #[error("Unknown field: {field} on model {model}")]
    UnknownField { model: String, field: String },

    #[error("Unknown inline: {inline} on model {model}")]
    UnknownInline { model: String, inline: String },

    #[error("Unknown action: {code}")]
    UnknownAction { code: String },

    #[error("Action {action} is not offered for field {field} (allowed: {allowed})")]
    InvalidAction {
        field: String,
        action: MassAction,
        allowed: String,
    },

    #[error("Action {action} does not apply to {kind} fields")]
    ActionNotApplicable { action: MassAction, kind: FieldKind },

    #[error("Invalid value for {field}: expected {expected}, got {actual}")]
    InvalidValue {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Record not found: {model} #{id}")]
    RecordNotFound { model: String, id: RecordId },

    #[error("Unknown reference in {field}: {model} #{id} does not exist")]
    UnknownReference {
        field: String,
        model: String,
        id: RecordId,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl MutationError {
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    pub fn unknown_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            model: model.into(),
            field: field.into(),
        }
    }

    pub fn unknown_inline(model: impl Into<String>, inline: impl Into<String>) -> Self {
        Self::UnknownInline {
            model: model.into(),
            inline: inline.into(),
        }
    }

    pub fn unknown_action(code: impl Into<String>) -> Self {
        Self::UnknownAction { code: code.into() }
    }

    pub fn invalid_action(
        field: impl Into<String>,
        action: MassAction,
        allowed: impl Into<String>,
    ) -> Self {
        Self::InvalidAction {
            field: field.into(),
            action,
            allowed: allowed.into(),
        }
    }

    pub fn action_not_applicable(action: MassAction, kind: FieldKind) -> Self {
        Self::ActionNotApplicable { action, kind }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn record_not_found(model: impl Into<String>, id: RecordId) -> Self {
        Self::RecordNotFound {
            model: model.into(),
            id,
        }
    }

    pub fn unknown_reference(
        field: impl Into<String>,
        model: impl Into<String>,
        id: RecordId,
    ) -> Self {
        Self::UnknownReference {
            field: field.into(),
            model: model.into(),
            id,
        }
    }
}
