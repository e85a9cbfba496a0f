//! Relation-set semantics: DEFINE, REPLACE, ADD.

use massedit_core::{FieldKind, RelationDelta, RelationSet};

use crate::action::MassAction;
use crate::error::{MutationError, MutationResult};

/// Compute the delta a many-to-many field receives after `action`.
pub fn apply_relation(
    action: MassAction,
    current: &RelationSet,
    new: &RelationSet,
) -> MutationResult<RelationDelta> {
    match action {
        // Empty means zero related records
        MassAction::Define if current.is_empty() => Ok(RelationDelta::between(current, new)),
        MassAction::Define => Ok(RelationDelta::unchanged()),
        MassAction::Replace => Ok(RelationDelta::between(current, new)),
        MassAction::Add => Ok(RelationDelta::adding(current, new)),
        MassAction::Prepend | MassAction::Append => Err(MutationError::action_not_applicable(
            action,
            FieldKind::ManyToMany,
        )),
    }
}
