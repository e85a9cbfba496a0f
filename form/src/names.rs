//! Control names, labels and raw value encoding.
//!
//! Every field gets a `_mass_change_<field>` checkbox. Fields with an action
//! vocabulary also get a `_mass_change_<field>_action` selector. Inline rows
//! are submitted as `<inline>-<index>-<column>`.

use massedit_core::Value;
use regex_lite::Regex;
use std::sync::OnceLock;

use crate::error::{FormError, FormResult};

/// Prefix shared by every mass-change control.
pub const MASS_CHANGE_PREFIX: &str = "_mass_change_";

/// Suffix of the action selector.
pub const ACTION_SUFFIX: &str = "_action";

/// Label of the activation checkbox.
pub const TOGGLE_LABEL: &str = "Mass change";

/// Label of the action selector.
pub const ACTION_LABEL: &str = "Advanced operations";

pub fn toggle_name(field: &str) -> String {
    format!("{MASS_CHANGE_PREFIX}{field}")
}

pub fn action_name(field: &str) -> String {
    format!("{MASS_CHANGE_PREFIX}{field}{ACTION_SUFFIX}")
}

pub fn row_name(inline: &str, index: usize, column: &str) -> String {
    format!("{inline}-{index}-{column}")
}

/// Returns true if the key belongs to the mass-change control namespace.
pub fn is_mass_change_control(key: &str) -> bool {
    key.starts_with(MASS_CHANGE_PREFIX)
}

/// A decoded `<inline>-<index>-<column>` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowKey<'a> {
    pub inline: &'a str,
    pub index: usize,
    pub column: &'a str,
}

fn row_key_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(?P<inline>.+)-(?P<index>[0-9]+)-(?P<column>[A-Za-z_][A-Za-z0-9_]*)$").ok())
        .as_ref()
}

/// Split an inline row key. Management keys such as `<inline>-TOTAL_FORMS`
/// do not match and give `Ok(None)`. A row index too large for `usize` is
/// an unknown control.
pub fn parse_row_key(key: &str) -> FormResult<Option<RowKey<'_>>> {
    let Some(caps) = row_key_pattern().and_then(|p| p.captures(key)) else {
        return Ok(None);
    };
    let (Some(inline), Some(index), Some(column)) =
        (caps.name("inline"), caps.name("index"), caps.name("column"))
    else {
        return Ok(None);
    };
    let index = index
        .as_str()
        .parse()
        .map_err(|_| FormError::unknown_control(key))?;
    Ok(Some(RowKey {
        inline: inline.as_str(),
        index,
        column: column.as_str(),
    }))
}

/// Render a stored value the way a form control submits it.
pub fn form_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "on".to_string(),
        Value::Bool(false) => String::new(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Ref(id) => id.to_string(),
    }
}
