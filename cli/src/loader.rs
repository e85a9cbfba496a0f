//! JSON record files.
//!
//! The file maps model names to arrays of records. Each record carries its
//! `id` plus one key per field: scalars as JSON scalars, foreign keys as ids,
//! many-to-many fields as id arrays and inlines as arrays of row objects.
//! A dumped store reads back unchanged.

use massedit_core::{Attributes, FieldKind, Record, RecordId, RelationDelta, RelationSet, Value};
use massedit_registry::{FieldDef, ModelDef, Registry};
use massedit_store::{MemoryStore, RecordStore};
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;

use crate::error::{CliError, CliResult};

/// Load a parsed JSON document into a fresh store.
pub fn load_records(registry: &Registry, document: &Json) -> CliResult<MemoryStore> {
    let models = document
        .as_object()
        .ok_or_else(|| CliError::invalid_data("top level must be an object of models"))?;

    let mut store = MemoryStore::new();
    for (name, records) in models {
        let model = registry
            .get_model(name)
            .ok_or_else(|| CliError::invalid_data(format!("unknown model {name}")))?;
        let records = records
            .as_array()
            .ok_or_else(|| CliError::invalid_data(format!("{name} must be an array")))?;

        for record in records {
            let object = record
                .as_object()
                .ok_or_else(|| CliError::invalid_data(format!("{name} records must be objects")))?;
            load_record(&mut store, model, object)?;
        }
        tracing::debug!(model = %name, records = records.len(), "records loaded");
    }
    Ok(store)
}

fn load_record(store: &mut MemoryStore, model: &ModelDef, object: &Map<String, Json>) -> CliResult<()> {
    let id = object
        .get("id")
        .and_then(Json::as_u64)
        .map(RecordId::new)
        .ok_or_else(|| CliError::invalid_data(format!("{} record without a numeric id", model.name)))?;

    let mut attributes = Attributes::new();
    let mut relations = Vec::new();
    let mut children = Vec::new();

    for (key, json) in object {
        if key == "id" {
            continue;
        }
        if let Some(field) = model.get_field(key) {
            if field.kind == FieldKind::ManyToMany {
                relations.push((key.as_str(), json_relation(field, json)?));
            } else {
                attributes.insert(key.clone(), json_scalar(field, json)?);
            }
        } else if let Some(inline) = model.get_inline(key) {
            let rows = json
                .as_array()
                .ok_or_else(|| CliError::invalid_data(format!("{key} must be an array of rows")))?;
            let mut decoded = Vec::with_capacity(rows.len());
            for row in rows {
                let row = row
                    .as_object()
                    .ok_or_else(|| CliError::invalid_data(format!("{key} rows must be objects")))?;
                let mut cells = Attributes::new();
                for (column, json) in row {
                    let def = inline.get_column(column).ok_or_else(|| {
                        CliError::invalid_data(format!("unknown column {key}.{column}"))
                    })?;
                    cells.insert(column.clone(), json_scalar(def, json)?);
                }
                decoded.push(cells);
            }
            children.push((key.as_str(), decoded));
        } else {
            return Err(CliError::invalid_data(format!(
                "unknown field {}.{key}",
                model.name
            )));
        }
    }

    store.insert_with_id(&model.name, id, attributes)?;
    for (field, set) in relations {
        let delta = RelationDelta::between(&RelationSet::new(), &set);
        store.commit_relation(&model.name, id, field, &delta)?;
    }
    for (inline, rows) in children {
        store.commit_children(&model.name, id, inline, rows)?;
    }
    Ok(())
}

fn json_scalar(field: &FieldDef, json: &Json) -> CliResult<Value> {
    let invalid = || {
        CliError::invalid_data(format!(
            "{}: {json} is not a valid {} value",
            field.name, field.kind
        ))
    };

    let value = match (field.kind, json) {
        (_, Json::Null) => Value::Null,
        (FieldKind::ForeignKey, Json::Number(n)) => {
            Value::Ref(n.as_u64().map(RecordId::new).ok_or_else(invalid)?)
        }
        (FieldKind::ForeignKey, _) => return Err(invalid()),
        (FieldKind::Text, Json::String(s)) => Value::String(s.clone()),
        (FieldKind::Text, _) => return Err(invalid()),
        (FieldKind::Number, Json::Number(_)) => json_number(json).ok_or_else(invalid)?,
        (FieldKind::Number, _) => return Err(invalid()),
        (FieldKind::ManyToMany, _) => return Err(invalid()),
        (FieldKind::Choice | FieldKind::Other, Json::Bool(b)) => Value::Bool(*b),
        (FieldKind::Choice | FieldKind::Other, Json::Number(_)) => {
            json_number(json).ok_or_else(invalid)?
        }
        (FieldKind::Choice | FieldKind::Other, Json::String(s)) => Value::String(s.clone()),
        (FieldKind::Choice | FieldKind::Other, _) => return Err(invalid()),
    };
    Ok(value)
}

fn json_number(json: &Json) -> Option<Value> {
    json.as_i64()
        .map(Value::Int)
        .or_else(|| json.as_f64().map(Value::Float))
}

fn json_relation(field: &FieldDef, json: &Json) -> CliResult<RelationSet> {
    let ids = json.as_array().ok_or_else(|| {
        CliError::invalid_data(format!("{} must be an array of ids", field.name))
    })?;
    ids.iter()
        .map(|id| {
            id.as_u64().map(RecordId::new).ok_or_else(|| {
                CliError::invalid_data(format!("{}: {id} is not an id", field.name))
            })
        })
        .collect()
}

/// Every record of every model, keyed by model, in the file's shape.
pub fn dump_records<'a>(
    registry: &Registry,
    store: &'a MemoryStore,
) -> BTreeMap<String, Vec<&'a Record>> {
    registry
        .model_names()
        .into_iter()
        .map(|name| (name.to_string(), store.records(name).collect::<Vec<_>>()))
        .filter(|(_, records)| !records.is_empty())
        .collect()
}
