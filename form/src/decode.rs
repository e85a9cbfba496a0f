//! Submission decoding.
//!
//! A submission is a flat `control name -> string` map, as a browser posts
//! it. Decoding reads it through the model's form: each field contributes
//! its toggle, its action selector when it has one, and its raw value under
//! the field's own name. Keys outside the mass-change namespace that match no
//! field are ignored; unknown mass-change controls are an error.

use massedit_core::{Attributes, FieldKind, FieldValue, RelationSet, Value};
use massedit_mutation::{FieldChange, InlineChange, MassAction, MassEditRequest};
use massedit_registry::{FieldDef, ModelDef, Registry};
use std::collections::BTreeMap;

use crate::error::{FormError, FormResult};
use crate::names::{self, form_value};
use crate::options::MassOptionsForm;
use crate::selection::parse_selection;

/// Returns true for the values a checked checkbox submits.
pub fn is_checked(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("on" | "true" | "1")
    )
}

/// Decode a submitted string into a scalar of the field's kind.
///
/// Text is kept exactly as submitted. For every other kind an empty string
/// is null.
pub fn decode_scalar(field: &FieldDef, raw: &str) -> FormResult<Value> {
    if field.kind == FieldKind::Text {
        return Ok(Value::String(raw.to_string()));
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    match field.kind {
        FieldKind::Number => parse_number(trimmed)
            .ok_or_else(|| FormError::invalid_number(&field.name, raw)),
        FieldKind::ForeignKey => trimmed
            .parse()
            .map(Value::Ref)
            .map_err(|_| FormError::invalid_reference(&field.name, raw)),
        FieldKind::Choice if field.choices.is_empty() => Ok(Value::String(trimmed.to_string())),
        FieldKind::Choice => field
            .choices
            .iter()
            .find(|c| form_value(&c.value) == trimmed)
            .map(|c| c.value.clone())
            .ok_or_else(|| FormError::invalid_choice(&field.name, raw)),
        FieldKind::ManyToMany => Err(FormError::invalid_reference(&field.name, raw)),
        FieldKind::Text | FieldKind::Other => Ok(Value::String(trimmed.to_string())),
    }
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Value::Int(i));
    }
    raw.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Value::Float)
}

/// Decode a submitted string into the field's value shape.
///
/// Many-to-many values are a comma-joined id list.
pub fn decode_value(field: &FieldDef, raw: &str) -> FormResult<FieldValue> {
    if field.kind.is_multi() {
        let ids = parse_selection(raw)
            .map_err(|_| FormError::invalid_reference(&field.name, raw))?;
        return Ok(FieldValue::Related(ids.into_iter().collect::<RelationSet>()));
    }
    decode_scalar(field, raw).map(FieldValue::Scalar)
}

/// Decode a form submission into a request.
///
/// `selection` is the comma-joined target list the form was rendered for.
pub fn decode_submission(
    registry: &Registry,
    model: &str,
    selection: &str,
    data: &BTreeMap<String, String>,
) -> FormResult<MassEditRequest> {
    let form = MassOptionsForm::for_model(registry, model)?;
    let def = registry
        .get_model(model)
        .ok_or_else(|| FormError::unknown_model(model))?;

    let known = form.control_names();
    if let Some(unknown) = data
        .keys()
        .find(|k| names::is_mass_change_control(k) && !known.contains(k.as_str()))
    {
        return Err(FormError::unknown_control(unknown));
    }

    let mut request = MassEditRequest::new(model).targets(parse_selection(selection)?);

    for controls in &form.fields {
        let Some(field) = def.get_editable_field(&controls.field) else {
            continue;
        };
        let active = is_checked(data.get(&controls.toggle.name).map(String::as_str));

        let action = match (&controls.action, active) {
            (Some(select), true) => data
                .get(&select.name)
                .map(|code| code.trim().parse::<MassAction>())
                .transpose()?,
            _ => None,
        };

        // Values behind an unchecked toggle are never looked at
        let change = if active {
            let raw = data.get(&field.name).map(String::as_str).unwrap_or("");
            let mut change = FieldChange::new(decode_value(field, raw)?);
            change.action = action;
            change
        } else if data.contains_key(&controls.toggle.name) || data.contains_key(&field.name) {
            FieldChange::new(Value::Null).inactive()
        } else {
            continue;
        };

        request = request.field(&field.name, change);
    }

    for controls in &form.inlines {
        let active = is_checked(data.get(&controls.toggle.name).map(String::as_str));
        if !active {
            if data.contains_key(&controls.toggle.name) {
                request = request.inline(&controls.inline, InlineChange::default());
            }
            continue;
        }
        let rows = decode_rows(def, &controls.inline, data)?;
        request = request.inline(&controls.inline, InlineChange::new(rows));
    }

    tracing::debug!(
        model,
        targets = request.target_ids.len(),
        fields = request.fields.len(),
        inlines = request.inlines.len(),
        "submission decoded"
    );
    Ok(request)
}

/// Collect `<inline>-<index>-<column>` keys into rows ordered by index.
/// Rows whose cells are all blank are dropped.
fn decode_rows(
    model: &ModelDef,
    inline: &str,
    data: &BTreeMap<String, String>,
) -> FormResult<Vec<Attributes>> {
    let Some(def) = model.get_inline(inline) else {
        return Ok(Vec::new());
    };

    let mut rows: BTreeMap<usize, Attributes> = BTreeMap::new();
    let mut blank: BTreeMap<usize, bool> = BTreeMap::new();

    for (key, raw) in data {
        let Some(row_key) = names::parse_row_key(key)? else {
            continue;
        };
        if row_key.inline != inline {
            continue;
        }
        let column = def
            .get_column(row_key.column)
            .ok_or_else(|| FormError::unknown_control(key))?;

        let value = decode_scalar(column, raw)?;
        let is_blank = value.is_empty();
        rows.entry(row_key.index)
            .or_default()
            .insert(column.name.clone(), value);
        *blank.entry(row_key.index).or_insert(true) &= is_blank;
    }

    Ok(rows
        .into_iter()
        .filter(|(index, _)| !blank.get(index).copied().unwrap_or(true))
        .map(|(_, row)| row)
        .collect())
}
