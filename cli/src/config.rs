//! TOML configuration: where the records live and how models are declared.
//!
//! ```toml
//! data = "boats.json"
//!
//! [models.Boat]
//! exclude = ["win_races"]
//! fields = [
//!     { name = "name", kind = "text" },
//!     { name = "length", kind = "number" },
//!     { name = "captain", kind = "foreign_key", related = "Captain" },
//! ]
//! ```

use massedit_core::{FieldKind, Value};
use massedit_registry::{Choice, FieldDef, InlineDef, Registry, RegistryBuilder};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON records file, relative to the config file.
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub models: BTreeMap<String, ModelConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
    #[serde(default)]
    pub inlines: Vec<InlineConfig>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,
    pub kind: FieldKind,
    pub label: Option<String>,
    #[serde(default)]
    pub composite: bool,
    #[serde(default)]
    pub nullable: bool,
    pub related: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChoiceConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InlineConfig {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceConfig {
    pub value: ScalarConfig,
    pub label: String,
}

/// A literal choice value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarConfig {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<ScalarConfig> for Value {
    fn from(value: ScalarConfig) -> Self {
        match value {
            ScalarConfig::Bool(b) => Value::Bool(b),
            ScalarConfig::Int(i) => Value::Int(i),
            ScalarConfig::Float(f) => Value::Float(f),
            ScalarConfig::String(s) => Value::String(s),
        }
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let mut config: Config = toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        // Resolve the data path against the config's directory
        if let (Some(data), Some(dir)) = (&config.data, path.parent()) {
            if data.is_relative() {
                config.data = Some(dir.join(data));
            }
        }

        tracing::debug!(path = %path.display(), models = config.models.len(), "config loaded");
        Ok(config)
    }

    /// Build the model registry the config declares.
    pub fn registry(&self) -> CliResult<Registry> {
        let mut builder = RegistryBuilder::new();

        for (name, model) in &self.models {
            let mut fields = Vec::with_capacity(model.fields.len());
            for field in &model.fields {
                fields.push(field.to_def(name)?);
            }
            let mut inlines = Vec::with_capacity(model.inlines.len());
            for inline in &model.inlines {
                let mut def = InlineDef::new(&inline.name);
                for column in &inline.columns {
                    def = def.column(column.to_def(&inline.name)?);
                }
                inlines.push(def);
            }

            let mut model_builder = builder.add_model(name);
            for field in fields {
                model_builder = model_builder.field(field);
            }
            for inline in inlines {
                model_builder = model_builder.inline(inline);
            }
            for excluded in &model.exclude {
                model_builder = model_builder.exclude(excluded);
            }
            model_builder.done()?;
        }

        Ok(builder.build()?)
    }
}

impl FieldConfig {
    fn to_def(&self, model: &str) -> CliResult<FieldDef> {
        let related = || {
            self.related.clone().ok_or_else(|| CliError::MissingRelatedModel {
                model: model.to_string(),
                field: self.name.clone(),
            })
        };

        let mut def = match self.kind {
            FieldKind::ForeignKey => FieldDef::foreign_key(&self.name, related()?),
            FieldKind::ManyToMany => FieldDef::many_to_many(&self.name, related()?),
            FieldKind::Choice => FieldDef::choice(
                &self.name,
                self.choices
                    .iter()
                    .map(|c| Choice::new(c.value.clone(), &c.label))
                    .collect(),
            ),
            kind => FieldDef::new(&self.name, kind),
        };

        if self.composite {
            def = def.composite();
        }
        if self.nullable {
            def = def.nullable();
        }
        if let Some(label) = &self.label {
            def = def.with_label(label);
        }
        Ok(def)
    }
}
