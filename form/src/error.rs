//! Form error types.

use massedit_mutation::MutationError;
use thiserror::Error;

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while building or decoding a form.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown model: {name}")]
    UnknownModel { name: String },

    #[error("Invalid selection {input:?}: {reason}")]
    InvalidSelection { input: String, reason: String },

    #[error("Unknown control: {name}")]
    UnknownControl { name: String },

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("Invalid record reference for {field}: {value:?}")]
    InvalidReference { field: String, value: String },

    #[error("Invalid choice for {field}: {value:?}")]
    InvalidChoice { field: String, value: String },

    #[error(transparent)]
    Action(#[from] MutationError),
}

impl FormError {
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    pub fn invalid_selection(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSelection {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_control(name: impl Into<String>) -> Self {
        Self::UnknownControl { name: name.into() }
    }

    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_reference(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidReference {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_choice(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidChoice {
            field: field.into(),
            value: value.into(),
        }
    }
}
