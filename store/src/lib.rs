//! massedit Record Storage
//!
//! This crate defines the record store seam consumed by the mutation layer
//! and an in-memory implementation:
//! - `RecordStore`: current value lookup and commit operations
//! - `MemoryStore`: records grouped by model, with id allocation per model

mod memory;
mod store;

pub use memory::MemoryStore;
pub use store::RecordStore;
