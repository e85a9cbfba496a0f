//! Identity types for mass-edited records.
//!
//! Record identifiers are the host's primary keys:
//! - Unique within one model
//! - Immutable once assigned
//! - Rendered as plain integers so selections can be comma-joined

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Create a new RecordId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(RecordId)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

/// The members of a many-to-many relation, ordered by id.
pub type RelationSet = BTreeSet<RecordId>;

/// Helper macro to create relation sets from raw ids or RecordIds.
#[macro_export]
macro_rules! related {
    () => {
        $crate::RelationSet::new()
    };
    ($($id:expr),+ $(,)?) => {
        {
            let mut set = $crate::RelationSet::new();
            $(
                set.insert($crate::RecordId::from($id));
            )+
            set
        }
    };
}
