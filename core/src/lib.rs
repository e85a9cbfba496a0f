//! massedit Core Types
//!
//! This crate provides the foundational types shared by every massedit crate:
//! - Identity types (RecordId, RelationSet)
//! - Value types (the Value enum stored in record attributes)
//! - Field descriptors (FieldKind, FieldDescriptor, FieldValue)
//! - Record structures and relation deltas
//! - Common store error types

mod delta;
mod error;
mod field;
mod id;
mod record;
mod value;

pub use delta::*;
pub use error::*;
pub use field::*;
pub use id::*;
pub use record::*;
pub use value::*;
