//! `apply` and `form` commands.

use massedit_form::{decode_submission, MassOptionsForm};
use massedit_mutation::{MassEditExecutor, MassEditOutcome};
use massedit_registry::Registry;
use massedit_store::MemoryStore;
use serde::Serialize;
use serde_json::Value as Json;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{CliError, CliResult};
use crate::loader;

/// Output of `massedit apply`.
#[derive(Debug, Serialize)]
pub struct ApplyReport<'a> {
    pub outcome: MassEditOutcome,
    /// The selected records after the edit.
    pub records: Vec<&'a massedit_core::Record>,
}

/// Read a JSON file.
pub fn read_json(path: &Path) -> CliResult<Json> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Flatten a submission object into the string map a browser would post.
///
/// Booleans become checkbox values, numbers their decimal text and arrays
/// comma-joined lists.
pub fn submission_fields(document: &Json) -> CliResult<BTreeMap<String, String>> {
    let object = document
        .as_object()
        .ok_or_else(|| CliError::invalid_data("submission must be an object"))?;

    let mut fields = BTreeMap::new();
    for (key, value) in object {
        let raw = match value {
            Json::Null => String::new(),
            Json::Bool(true) => "on".to_string(),
            Json::Bool(false) => "off".to_string(),
            Json::String(s) => s.clone(),
            Json::Number(n) => n.to_string(),
            Json::Array(items) => items
                .iter()
                .map(|item| match item {
                    Json::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Json::Object(_) => {
                return Err(CliError::invalid_data(format!(
                    "submission value for {key} must be a scalar or a list"
                )))
            }
        };
        fields.insert(key.clone(), raw);
    }
    Ok(fields)
}

/// Decode and execute one submission against the store.
pub fn apply<'s>(
    registry: &Registry,
    store: &'s mut MemoryStore,
    model: &str,
    selection: &str,
    submission: &BTreeMap<String, String>,
) -> CliResult<ApplyReport<'s>> {
    let request = decode_submission(registry, model, selection, submission)?;
    let outcome = MassEditExecutor::new(registry, store).execute(&request)?;

    tracing::info!(
        model,
        targets = outcome.targets.len(),
        changed = outcome.changed_records().len(),
        "mass edit applied"
    );

    let store: &'s MemoryStore = store;
    let records = outcome
        .targets
        .iter()
        .filter_map(|&id| store.get(model, id))
        .collect();
    Ok(ApplyReport { outcome, records })
}

/// The controls a model's mass-change form offers.
pub fn form(registry: &Registry, model: &str) -> CliResult<MassOptionsForm> {
    Ok(MassOptionsForm::for_model(registry, model)?)
}

/// Write the whole store back in the record file format.
pub fn save(registry: &Registry, store: &MemoryStore, path: &Path) -> CliResult<()> {
    let content = serde_json::to_string_pretty(&loader::dump_records(registry, store))?;
    fs::write(path, content).map_err(|e| CliError::io(path, e))?;
    tracing::debug!(path = %path.display(), "records saved");
    Ok(())
}
