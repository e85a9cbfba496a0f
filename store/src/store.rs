//! The record store seam.

use massedit_core::{Attributes, RecordId, RelationDelta, RelationSet, StoreResult, Value};

/// Storage backing a mass edit.
///
/// Reads return the state a field would have if nothing had ever been
/// written: an unset scalar is `Value::Null`, an unset relation is empty.
/// Every method fails with `StoreError::RecordNotFound` for unknown records.
pub trait RecordStore {
    /// Returns true if the record exists.
    fn contains(&self, model: &str, id: RecordId) -> bool;

    /// Current value of a scalar field.
    fn value(&self, model: &str, id: RecordId, field: &str) -> StoreResult<Value>;

    /// Current members of a many-to-many field.
    fn relation(&self, model: &str, id: RecordId, field: &str) -> StoreResult<RelationSet>;

    /// Current child rows of an inline.
    fn children(&self, model: &str, id: RecordId, inline: &str) -> StoreResult<Vec<Attributes>>;

    /// Persist a resolved scalar value.
    fn commit_value(&mut self, model: &str, id: RecordId, field: &str, value: Value)
        -> StoreResult<()>;

    /// Persist a relation change.
    fn commit_relation(
        &mut self,
        model: &str,
        id: RecordId,
        field: &str,
        delta: &RelationDelta,
    ) -> StoreResult<()>;

    /// Replace the child rows of an inline.
    fn commit_children(
        &mut self,
        model: &str,
        id: RecordId,
        inline: &str,
        rows: Vec<Attributes>,
    ) -> StoreResult<()>;
}
