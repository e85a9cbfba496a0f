//! massedit Mutation
//!
//! Resolve which mass-change actions a field offers, and apply them.
//!
//! Responsibilities:
//! - Map a field descriptor to its action vocabulary
//! - Compute the resolved value or relation delta for one record
//! - Validate a whole request before anything is written
//! - Apply active fields and inlines across every target record
//!
//! # Module Structure
//!
//! - `action` - Mass-change actions and the vocabularies that group them
//! - `resolver` - Field-action resolution (which controls a field offers)
//! - `applicator` - Pure per-record application, dispatching to `ops/`
//! - `ops/` - Scalar/text and relation-set semantics
//! - `validation` - New-value checks against the field definition
//! - `request` - The decoded mass-edit request
//! - `executor` - Main MassEditExecutor that coordinates a request
//! - `error` - Error types for mutation failures
//! - `result` - Outcome of an executed request

mod action;
mod applicator;
mod error;
mod executor;
mod ops;
mod request;
mod resolver;
mod result;
mod validation;

pub use action::{ActionVocabulary, MassAction};
pub use applicator::{apply, Resolved};
pub use error::{MutationError, MutationResult};
pub use executor::MassEditExecutor;
pub use request::{FieldChange, InlineChange, MassEditRequest};
pub use resolver::{resolve, resolve_inline, MassOptions};
pub use result::{FieldOutcome, MassEditOutcome};
