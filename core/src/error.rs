//! Common error types for massedit.

use crate::RecordId;
use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found.
    #[error("Record not found: {model} #{id}")]
    RecordNotFound { model: String, id: RecordId },

    /// Record id already taken.
    #[error("Duplicate record id: {model} #{id}")]
    DuplicateRecord { model: String, id: RecordId },
}

impl StoreError {
    pub fn record_not_found(model: impl Into<String>, id: RecordId) -> Self {
        Self::RecordNotFound {
            model: model.into(),
            id,
        }
    }

    pub fn duplicate_record(model: impl Into<String>, id: RecordId) -> Self {
        Self::DuplicateRecord {
            model: model.into(),
            id,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
