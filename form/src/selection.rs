//! Comma-joined target id lists.

use massedit_core::RecordId;

use crate::error::{FormError, FormResult};

/// Parse a selection such as `"3,1,2"`.
///
/// Ids keep their first-seen order and repeats are dropped. A blank string
/// is an empty selection. Empty segments and non-numeric ids are rejected.
pub fn parse_selection(input: &str) -> FormResult<Vec<RecordId>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut ids = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(FormError::invalid_selection(input, "empty id"));
        }
        let id: RecordId = part
            .parse()
            .map_err(|_| FormError::invalid_selection(input, format!("not an id: {part:?}")))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Join ids the way [`parse_selection`] reads them.
pub fn format_selection(ids: &[RecordId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
