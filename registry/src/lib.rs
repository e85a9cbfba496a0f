//! massedit Registry
//!
//! The descriptor provider: models, their editable fields and their inlines.
//!
//! A [`Registry`] is built once through [`RegistryBuilder`] and is immutable
//! afterwards. It hands out [`FieldDescriptor`](massedit_core::FieldDescriptor)s
//! in declaration order, skipping excluded fields.

mod builder;
mod registry;
mod types;

pub use builder::{ModelBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::{Choice, FieldDef, InlineDef, ModelDef};
