//! Record structures.
//!
//! A record is one row of a host model: scalar attributes, many-to-many
//! relation sets, and child collections edited through inlines.

use crate::{Attributes, RecordId, RelationDelta, RelationSet, Value};
use serde::Serialize;
use std::collections::BTreeMap;

/// A stored record.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Unique identifier for this record.
    pub id: RecordId,
    /// Version number, bumped on every write.
    #[serde(skip)]
    pub version: u64,
    /// Scalar attribute values.
    #[serde(flatten)]
    pub attributes: Attributes,
    /// Many-to-many relation sets by field name.
    #[serde(flatten)]
    pub relations: BTreeMap<String, RelationSet>,
    /// Child rows by inline name.
    #[serde(flatten)]
    pub children: BTreeMap<String, Vec<Attributes>>,
}

impl Record {
    /// Create a new record with the given attributes.
    pub fn new(id: RecordId, attributes: Attributes) -> Self {
        Self {
            id,
            version: 1,
            attributes,
            relations: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute value.
    pub fn set_attr(&mut self, name: String, value: Value) {
        self.attributes.insert(name, value);
        self.version += 1;
    }

    /// Get a relation set by field name.
    pub fn relation(&self, name: &str) -> Option<&RelationSet> {
        self.relations.get(name)
    }

    /// Apply a delta to a relation set, creating it if needed.
    pub fn update_relation(&mut self, name: &str, delta: &RelationDelta) {
        if delta.is_empty() {
            return;
        }
        let set = self.relations.entry(name.to_string()).or_default();
        delta.apply_to(set);
        self.version += 1;
    }

    /// Get the child rows of an inline.
    pub fn children(&self, inline: &str) -> &[Attributes] {
        self.children
            .get(inline)
            .map(|rows| rows.as_slice())
            .unwrap_or(&[])
    }

    /// Replace the child rows of an inline.
    pub fn set_children(&mut self, inline: String, rows: Vec<Attributes>) {
        self.children.insert(inline, rows);
        self.version += 1;
    }
}
