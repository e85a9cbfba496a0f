//! Submitted-value validation helpers.

use massedit_core::{FieldKind, FieldValue, Value};
use massedit_registry::FieldDef;

use crate::action::MassAction;
use crate::error::{MutationError, MutationResult};

/// Validate a submitted value against its field definition and action.
pub fn validate_new_value(
    field: &FieldDef,
    action: MassAction,
    value: &FieldValue,
) -> MutationResult<()> {
    match (field.kind, value) {
        (FieldKind::ManyToMany, FieldValue::Related(_)) => Ok(()),
        (FieldKind::ManyToMany, other) => Err(MutationError::invalid_value(
            &field.name,
            "RelationSet",
            other.type_name(),
        )),
        (_, FieldValue::Related(_)) => Err(MutationError::invalid_value(
            &field.name,
            expected_type(field.kind),
            "RelationSet",
        )),
        (_, FieldValue::Scalar(value)) => {
            // Concatenation needs actual text to concatenate
            if matches!(action, MassAction::Prepend | MassAction::Append) && !value.is_string() {
                return Err(MutationError::invalid_value(
                    &field.name,
                    "String",
                    value.type_name(),
                ));
            }
            validate_scalar(field, value)
        }
    }
}

/// Validate a scalar value against a field (or inline column) definition.
pub fn validate_scalar(field: &FieldDef, value: &Value) -> MutationResult<()> {
    if value.is_null() {
        if field.nullable {
            return Ok(());
        }
        return Err(MutationError::invalid_value(
            &field.name,
            format!("non-null {}", expected_type(field.kind)),
            "Null",
        ));
    }
    if field.kind == FieldKind::Text && !field.nullable && value.is_empty() {
        return Err(MutationError::invalid_value(
            &field.name,
            "non-blank String",
            "blank String",
        ));
    }

    let compatible = match field.kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Number => value.is_numeric(),
        FieldKind::ForeignKey => value.is_ref(),
        FieldKind::Choice => {
            field.choices.is_empty() || field.choices.iter().any(|c| &c.value == value)
        }
        FieldKind::Other => true,
        FieldKind::ManyToMany => false,
    };

    if !compatible {
        return Err(MutationError::invalid_value(
            &field.name,
            expected_type(field.kind),
            value.to_string(),
        ));
    }

    Ok(())
}

fn expected_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "String",
        FieldKind::Number => "Int or Float",
        FieldKind::ForeignKey => "Ref",
        FieldKind::Choice => "one of the declared choices",
        FieldKind::ManyToMany => "RelationSet",
        FieldKind::Other => "scalar",
    }
}
