//! The boats fixture.
//!
//! Captains and races are plain named models. A boat has text, number,
//! choice and foreign key fields, a many-to-many `previous_captains`, and
//! race results edited through the `boattorace_set` inline. `win_races`
//! is the many-to-many those results back, excluded from the form.

use massedit_core::{attrs, Attributes, RecordId, RelationDelta, RelationSet, Value};
use massedit_registry::{Choice, FieldDef, InlineDef, Registry, RegistryBuilder, RegistryError};
use massedit_store::{MemoryStore, RecordStore};
use std::collections::HashMap;

use crate::error::{ScenarioError, ScenarioResult};

pub const CAPTAIN: &str = "Captain";
pub const RACE: &str = "Race";
pub const BOAT: &str = "Boat";
pub const BOAT_TO_RACE: &str = "boattorace_set";

/// Victory date used when a race result gives none.
pub const DEFAULT_VICTORY_DATE: &str = "2002-02-20";

/// Declare the boats models.
pub fn boats_registry() -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    builder
        .add_model(CAPTAIN)
        .field(FieldDef::text("name"))
        .field(FieldDef::other("birthday"))
        .done()?;
    builder.add_model(RACE).field(FieldDef::text("name")).done()?;
    builder
        .add_model(BOAT)
        .field(FieldDef::text("name"))
        .field(FieldDef::text("architect").nullable())
        .field(FieldDef::number("length"))
        .field(FieldDef::choice(
            "rigging",
            vec![
                Choice::new(1i64, "sloop"),
                Choice::new(2i64, "cutter"),
                Choice::new(3i64, "ketch"),
                Choice::new(4i64, "schooner"),
            ],
        ))
        .field(FieldDef::foreign_key("captain", CAPTAIN))
        .field(FieldDef::many_to_many("previous_captains", CAPTAIN))
        .field(FieldDef::many_to_many("win_races", RACE))
        .inline(
            InlineDef::new(BOAT_TO_RACE)
                .column(FieldDef::foreign_key("race", RACE))
                .column(FieldDef::other("victory_date")),
        )
        .exclude("win_races")
        .done()?;
    builder.build()
}

/// A boat to create. Relations name captains and races by label.
#[derive(Debug, Clone, Default)]
pub struct BoatSpec {
    name: Option<String>,
    architect: Option<String>,
    length: Option<f64>,
    rigging: Option<i64>,
    captain: Option<String>,
    previous_captains: Vec<String>,
    races: Vec<(String, Option<String>)>,
}

impl BoatSpec {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn architect(mut self, architect: impl Into<String>) -> Self {
        self.architect = Some(architect.into());
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn rigging(mut self, rigging: i64) -> Self {
        self.rigging = Some(rigging);
        self
    }

    pub fn captain(mut self, label: impl Into<String>) -> Self {
        self.captain = Some(label.into());
        self
    }

    pub fn previous_captains<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.previous_captains = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Record a race win, on the default date unless one is given.
    pub fn won(mut self, race: impl Into<String>, date: Option<&str>) -> Self {
        self.races.push((race.into(), date.map(str::to_string)));
        self
    }
}

/// Start a boat with factory defaults.
pub fn boat() -> BoatSpec {
    BoatSpec::default()
}

/// Creates fixture records and remembers them by label.
pub struct Factory {
    pub registry: Registry,
    pub store: MemoryStore,
    labels: HashMap<String, RecordId>,
}

impl Factory {
    pub fn new() -> ScenarioResult<Self> {
        Ok(Self {
            registry: boats_registry()?,
            store: MemoryStore::new(),
            labels: HashMap::new(),
        })
    }

    /// Look up a labelled record.
    pub fn id(&self, label: &str) -> ScenarioResult<RecordId> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| ScenarioError::unknown_label(label))
    }

    pub fn ids(&self, labels: &[String]) -> ScenarioResult<Vec<RecordId>> {
        labels.iter().map(|l| self.id(l)).collect()
    }

    /// Create a captain named after its label.
    pub fn captain(&mut self, label: &str) -> RecordId {
        let id = self.store.insert(
            CAPTAIN,
            attrs! { "name" => label, "birthday" => "1966-03-21" },
        );
        self.labels.insert(label.to_string(), id);
        id
    }

    /// Create a race named after its label.
    pub fn race(&mut self, label: &str) -> RecordId {
        let id = self.store.insert(RACE, attrs! { "name" => label });
        self.labels.insert(label.to_string(), id);
        id
    }

    /// Create a boat. Without a captain, a fresh one is made for it.
    pub fn boat(&mut self, spec: BoatSpec) -> ScenarioResult<RecordId> {
        let captain = match &spec.captain {
            Some(label) => self.id(label)?,
            None => self.store.insert(
                CAPTAIN,
                attrs! { "name" => "Captain from factory", "birthday" => "1966-03-21" },
            ),
        };

        let id = self.store.insert(
            BOAT,
            attrs! {
                "name" => spec.name.unwrap_or_else(|| "Boat from factory".to_string()),
                "architect" => spec.architect,
                "length" => spec.length.unwrap_or(10.0),
                "rigging" => spec.rigging.unwrap_or(1),
                "captain" => captain,
            },
        );

        let previous: RelationSet = self.ids(&spec.previous_captains)?.into_iter().collect();
        if !previous.is_empty() {
            let delta = RelationDelta::between(&RelationSet::new(), &previous);
            self.store.commit_relation(BOAT, id, "previous_captains", &delta)?;
        }

        if !spec.races.is_empty() {
            let mut rows: Vec<Attributes> = Vec::with_capacity(spec.races.len());
            let mut won = RelationSet::new();
            for (race, date) in &spec.races {
                let race = self.id(race)?;
                won.insert(race);
                rows.push(attrs! {
                    "race" => race,
                    "victory_date" => date.clone().unwrap_or_else(|| DEFAULT_VICTORY_DATE.to_string()),
                });
            }
            self.store.commit_children(BOAT, id, BOAT_TO_RACE, rows)?;
            let delta = RelationDelta::between(&RelationSet::new(), &won);
            self.store.commit_relation(BOAT, id, "win_races", &delta)?;
        }

        Ok(id)
    }

    /// Create a boat and label it.
    pub fn labelled_boat(&mut self, label: &str, spec: BoatSpec) -> ScenarioResult<RecordId> {
        let id = self.boat(spec)?;
        self.labels.insert(label.to_string(), id);
        Ok(id)
    }

    pub fn value(&self, boat: RecordId, field: &str) -> ScenarioResult<Value> {
        Ok(self.store.value(BOAT, boat, field)?)
    }

    pub fn relation(&self, boat: RecordId, field: &str) -> ScenarioResult<RelationSet> {
        Ok(self.store.relation(BOAT, boat, field)?)
    }

    pub fn races(&self, boat: RecordId) -> ScenarioResult<Vec<Attributes>> {
        Ok(self.store.children(BOAT, boat, BOAT_TO_RACE)?)
    }

    /// A record's write counter.
    pub fn version(&self, boat: RecordId) -> Option<u64> {
        self.store.get(BOAT, boat).map(|r| r.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use massedit_core::related;

    #[test]
    fn test_factory_defaults() {
        let mut f = Factory::new().unwrap();
        let b = f.boat(boat()).unwrap();

        assert_eq!(f.value(b, "name").unwrap(), Value::from("Boat from factory"));
        assert_eq!(f.value(b, "length").unwrap(), Value::Float(10.0));
        assert_eq!(f.value(b, "rigging").unwrap(), Value::Int(1));
        assert_eq!(f.value(b, "architect").unwrap(), Value::Null);
        assert!(f.value(b, "captain").unwrap().is_ref());
    }

    #[test]
    fn test_factory_relations() {
        let mut f = Factory::new().unwrap();
        let c2 = f.captain("c2");
        let r1 = f.race("r1");
        let b = f
            .boat(boat().previous_captains(["c2"]).won("r1", None))
            .unwrap();

        assert_eq!(f.relation(b, "previous_captains").unwrap(), related![c2]);
        assert_eq!(f.relation(b, "win_races").unwrap(), related![r1]);
        assert_eq!(
            f.races(b).unwrap(),
            vec![attrs! { "race" => r1, "victory_date" => DEFAULT_VICTORY_DATE }]
        );
    }

    #[test]
    fn test_unknown_label() {
        let mut f = Factory::new().unwrap();
        let result = f.boat(boat().captain("nobody"));
        assert!(matches!(result, Err(ScenarioError::UnknownLabel(_))));
    }
}
