//! Relation deltas.
//!
//! A delta records which members to link and unlink on one record's
//! many-to-many relation. It is computed against the record's current set,
//! so applying it to that set yields the resolved membership.

use crate::{RecordId, RelationSet};
use serde::Serialize;

/// Members to add to and remove from a relation set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationDelta {
    /// Members linked by this change.
    pub added: RelationSet,
    /// Members unlinked by this change.
    pub removed: RelationSet,
}

impl RelationDelta {
    /// A delta that leaves the relation untouched.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// The delta turning `current` into exactly `target`.
    pub fn between(current: &RelationSet, target: &RelationSet) -> Self {
        Self {
            added: target.difference(current).copied().collect(),
            removed: current.difference(target).copied().collect(),
        }
    }

    /// The delta linking every member of `extra` not already in `current`.
    pub fn adding(current: &RelationSet, extra: &RelationSet) -> Self {
        Self {
            added: extra.difference(current).copied().collect(),
            removed: RelationSet::new(),
        }
    }

    /// Returns true if applying this delta changes nothing.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Apply the delta to a relation set in place.
    pub fn apply_to(&self, set: &mut RelationSet) {
        for id in &self.removed {
            set.remove(id);
        }
        set.extend(self.added.iter().copied());
    }

    /// Returns a copy of `set` with the delta applied.
    pub fn applied(&self, set: &RelationSet) -> RelationSet {
        let mut result = set.clone();
        self.apply_to(&mut result);
        result
    }

    /// Returns true if `id` is linked by this delta.
    pub fn links(&self, id: RecordId) -> bool {
        self.added.contains(&id)
    }
}
