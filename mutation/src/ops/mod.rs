//! Per-record action semantics.
//!
//! Scalar and text fields are handled in `scalar`, many-to-many relation
//! sets in `relation`. Both are pure: they read the current state and the
//! submitted value, and return what should be written.

mod relation;
mod scalar;

pub use relation::apply_relation;
pub use scalar::apply_scalar;
