//! In-memory record storage.

use crate::RecordStore;
use massedit_core::{
    Attributes, Record, RecordId, RelationDelta, RelationSet, StoreError, StoreResult, Value,
};
use std::collections::{BTreeMap, HashMap};

/// Records of a single model.
#[derive(Debug)]
struct Table {
    records: BTreeMap<RecordId, Record>,
    next_id: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Table {
    fn alloc_id(&mut self) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// The in-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Tables by model name
    tables: HashMap<String, Table>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Record Operations ====================

    /// Insert a record, allocating the next id of its model.
    pub fn insert(&mut self, model: &str, attributes: Attributes) -> RecordId {
        let table = self.tables.entry(model.to_string()).or_default();
        let id = table.alloc_id();
        table.records.insert(id, Record::new(id, attributes));
        id
    }

    /// Insert a record under a caller-chosen id.
    pub fn insert_with_id(
        &mut self,
        model: &str,
        id: RecordId,
        attributes: Attributes,
    ) -> StoreResult<()> {
        let table = self.tables.entry(model.to_string()).or_default();
        if table.records.contains_key(&id) {
            return Err(StoreError::duplicate_record(model, id));
        }
        table.next_id = table.next_id.max(id.raw() + 1);
        table.records.insert(id, Record::new(id, attributes));
        Ok(())
    }

    /// Get a record by id.
    pub fn get(&self, model: &str, id: RecordId) -> Option<&Record> {
        self.tables.get(model).and_then(|t| t.records.get(&id))
    }

    /// All records of a model, ordered by id.
    pub fn records(&self, model: &str) -> impl Iterator<Item = &Record> + '_ {
        self.tables
            .get(model)
            .into_iter()
            .flat_map(|t| t.records.values())
    }

    /// Number of records of a model.
    pub fn count(&self, model: &str) -> usize {
        self.tables.get(model).map(|t| t.records.len()).unwrap_or(0)
    }

    fn record(&self, model: &str, id: RecordId) -> StoreResult<&Record> {
        self.get(model, id)
            .ok_or_else(|| StoreError::record_not_found(model, id))
    }

    fn record_mut(&mut self, model: &str, id: RecordId) -> StoreResult<&mut Record> {
        self.tables
            .get_mut(model)
            .and_then(|t| t.records.get_mut(&id))
            .ok_or_else(|| StoreError::record_not_found(model, id))
    }
}

impl RecordStore for MemoryStore {
    fn contains(&self, model: &str, id: RecordId) -> bool {
        self.get(model, id).is_some()
    }

    fn value(&self, model: &str, id: RecordId, field: &str) -> StoreResult<Value> {
        let record = self.record(model, id)?;
        Ok(record.get_attr(field).cloned().unwrap_or(Value::Null))
    }

    fn relation(&self, model: &str, id: RecordId, field: &str) -> StoreResult<RelationSet> {
        let record = self.record(model, id)?;
        Ok(record.relation(field).cloned().unwrap_or_default())
    }

    fn children(&self, model: &str, id: RecordId, inline: &str) -> StoreResult<Vec<Attributes>> {
        let record = self.record(model, id)?;
        Ok(record.children(inline).to_vec())
    }

    fn commit_value(
        &mut self,
        model: &str,
        id: RecordId,
        field: &str,
        value: Value,
    ) -> StoreResult<()> {
        tracing::trace!(model, %id, field, %value, "commit value");
        let record = self.record_mut(model, id)?;
        record.set_attr(field.to_string(), value);
        Ok(())
    }

    fn commit_relation(
        &mut self,
        model: &str,
        id: RecordId,
        field: &str,
        delta: &RelationDelta,
    ) -> StoreResult<()> {
        tracing::trace!(
            model,
            %id,
            field,
            added = delta.added.len(),
            removed = delta.removed.len(),
            "commit relation"
        );
        let record = self.record_mut(model, id)?;
        record.update_relation(field, delta);
        Ok(())
    }

    fn commit_children(
        &mut self,
        model: &str,
        id: RecordId,
        inline: &str,
        rows: Vec<Attributes>,
    ) -> StoreResult<()> {
        tracing::trace!(model, %id, inline, rows = rows.len(), "commit children");
        let record = self.record_mut(model, id)?;
        record.set_children(inline.to_string(), rows);
        Ok(())
    }
}
