//! Scalar and text semantics: DEFINE, REPLACE, PREPEND, APPEND.

use massedit_core::{FieldKind, Value};

use crate::action::MassAction;
use crate::error::{MutationError, MutationResult};

/// Compute the value a scalar field takes after `action`.
pub fn apply_scalar(
    action: MassAction,
    kind: FieldKind,
    current: &Value,
    new: &Value,
) -> MutationResult<Value> {
    match action {
        MassAction::Define => {
            if current.is_empty() {
                Ok(new.clone())
            } else {
                Ok(current.clone())
            }
        }
        MassAction::Replace => Ok(new.clone()),
        MassAction::Prepend | MassAction::Append => {
            if kind != FieldKind::Text {
                return Err(MutationError::action_not_applicable(action, kind));
            }
            let current = text_of(current)?;
            let new = text_of(new)?;
            // Raw concatenation: separators come from the submitted text only
            let joined = if action == MassAction::Prepend {
                format!("{new}{current}")
            } else {
                format!("{current}{new}")
            };
            Ok(Value::String(joined))
        }
        MassAction::Add => Err(MutationError::action_not_applicable(action, kind)),
    }
}

/// Text content of a value; null reads as the empty string.
fn text_of(value: &Value) -> MutationResult<&str> {
    match value {
        Value::Null => Ok(""),
        Value::String(s) => Ok(s),
        other => Err(MutationError::invalid_value(
            "text",
            "String",
            other.type_name(),
        )),
    }
}
