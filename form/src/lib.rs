//! massedit Form
//!
//! The presentation side of a mass edit: which controls a model's form
//! offers, what they are called, and how a flat submission decodes back
//! into a [`MassEditRequest`](massedit_mutation::MassEditRequest).
//!
//! # Module Structure
//!
//! - `names` - Control names, labels and raw value encoding
//! - `options` - Per-model form controls, built from the resolver
//! - `selection` - Comma-joined target id lists
//! - `decode` - Submission decoding
//! - `error` - Error types for form failures

mod decode;
mod error;
pub mod names;
mod options;
mod selection;

pub use decode::{decode_scalar, decode_submission, decode_value, is_checked};
pub use error::{FormError, FormResult};
pub use options::{ActionChoice, ActionSelect, FieldControls, InlineControls, MassOptionsForm, Toggle};
pub use selection::{format_selection, parse_selection};
