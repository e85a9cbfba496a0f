//! Action application for one (field, record) pair.
//!
//! This is the single entry point every call site shares. It holds no state,
//! so records can be processed independently and in any order.

use massedit_core::{FieldKind, FieldValue, RelationDelta, Value};

use crate::action::MassAction;
use crate::error::{MutationError, MutationResult};
use crate::ops;

/// What to write back for one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The field's new scalar value.
    Value(Value),
    /// Members to link and unlink.
    Relation(RelationDelta),
}

impl Resolved {
    /// Returns true if writing this would alter `current`.
    pub fn changes(&self, current: &FieldValue) -> bool {
        match (self, current) {
            (Resolved::Value(v), FieldValue::Scalar(c)) => v != c,
            (Resolved::Relation(delta), FieldValue::Related(_)) => !delta.is_empty(),
            _ => true,
        }
    }
}

/// Compute what `action` writes into a field of kind `kind`, given the
/// record's current value and the submitted one.
pub fn apply(
    action: MassAction,
    kind: FieldKind,
    current: &FieldValue,
    new: &FieldValue,
) -> MutationResult<Resolved> {
    match (current, new) {
        (FieldValue::Related(current), FieldValue::Related(new)) if kind.is_multi() => {
            ops::apply_relation(action, current, new).map(Resolved::Relation)
        }
        (FieldValue::Scalar(current), FieldValue::Scalar(new)) if !kind.is_multi() => {
            ops::apply_scalar(action, kind, current, new).map(Resolved::Value)
        }
        (_, new) => {
            let expected = if kind.is_multi() { "RelationSet" } else { "scalar" };
            Err(MutationError::invalid_value(
                kind.as_str(),
                expected,
                new.type_name(),
            ))
        }
    }
}
