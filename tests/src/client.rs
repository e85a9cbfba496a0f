//! A form client that fills mass-change controls like an operator would.

use massedit_core::{Attributes, RecordId, Value};
use massedit_form::names::{self, form_value};
use massedit_form::{decode_submission, format_selection, MassOptionsForm};
use massedit_mutation::{MassEditExecutor, MassEditOutcome, MassEditRequest};
use massedit_registry::Registry;
use massedit_store::RecordStore;
use std::collections::BTreeMap;

use crate::error::{ScenarioError, ScenarioResult};

/// A rendered mass-change form for a selection, and what has been typed
/// into it so far.
#[derive(Debug, Clone)]
pub struct MassForm {
    model: String,
    selection: String,
    controls: MassOptionsForm,
    data: BTreeMap<String, String>,
}

impl MassForm {
    /// Render the form for the given records.
    pub fn open(registry: &Registry, model: &str, targets: &[RecordId]) -> ScenarioResult<Self> {
        Ok(Self {
            model: model.to_string(),
            selection: format_selection(targets),
            controls: MassOptionsForm::for_model(registry, model)?,
            data: BTreeMap::new(),
        })
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn controls(&self) -> &MassOptionsForm {
        &self.controls
    }

    /// The raw submission.
    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    /// Type a value into a field and check its toggle.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> ScenarioResult<&mut Self> {
        self.set_raw(field, form_value(&value.into()))
    }

    /// Pick related records in a many-to-many field and check its toggle.
    pub fn set_related(&mut self, field: &str, ids: &[RecordId]) -> ScenarioResult<&mut Self> {
        self.set_raw(field, format_selection(ids))
    }

    /// Type a raw string into a field and check its toggle.
    pub fn set_raw(&mut self, field: &str, raw: impl Into<String>) -> ScenarioResult<&mut Self> {
        let toggle = self
            .controls
            .field(field)
            .map(|c| c.toggle.name.clone())
            .ok_or_else(|| ScenarioError::control_not_found(names::toggle_name(field)))?;
        self.data.insert(field.to_string(), raw.into());
        self.data.insert(toggle, "on".to_string());
        Ok(self)
    }

    /// Pick an action code in a field's selector.
    pub fn set_action(&mut self, field: &str, code: &str) -> ScenarioResult<&mut Self> {
        let select = self
            .controls
            .field(field)
            .and_then(|c| c.action.as_ref())
            .map(|a| a.name.clone())
            .ok_or_else(|| ScenarioError::control_not_found(names::action_name(field)))?;
        self.data.insert(select, code.to_string());
        Ok(self)
    }

    /// Uncheck a field's or inline's toggle, leaving typed values in place.
    pub fn uncheck(&mut self, name: &str) -> &mut Self {
        self.data.remove(&names::toggle_name(name));
        self
    }

    /// Fill an inline's rows and check its toggle.
    pub fn set_inline(&mut self, inline: &str, rows: &[Attributes]) -> ScenarioResult<&mut Self> {
        let controls = self
            .controls
            .inline(inline)
            .ok_or_else(|| ScenarioError::control_not_found(names::toggle_name(inline)))?;
        let toggle = controls.toggle.name.clone();

        for (index, row) in rows.iter().enumerate() {
            for (column, value) in row {
                self.data
                    .insert(names::row_name(inline, index, column), form_value(value));
            }
        }
        self.data.insert(toggle, "on".to_string());
        Ok(self)
    }

    /// Decode the submission.
    pub fn request(&self, registry: &Registry) -> ScenarioResult<MassEditRequest> {
        Ok(decode_submission(
            registry,
            &self.model,
            &self.selection,
            &self.data,
        )?)
    }

    /// Decode and apply the submission.
    pub fn submit<S: RecordStore>(
        &self,
        registry: &Registry,
        store: &mut S,
    ) -> ScenarioResult<MassEditOutcome> {
        let request = self.request(registry)?;
        Ok(MassEditExecutor::new(registry, store).execute(&request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{boats_registry, BOAT, BOAT_TO_RACE};
    use massedit_core::attrs;

    #[test]
    fn test_set_checks_toggle() {
        let registry = boats_registry().unwrap();
        let mut form = MassForm::open(&registry, BOAT, &[RecordId::new(1)]).unwrap();

        form.set("architect", "William Fife")
            .unwrap()
            .set_action("architect", "replace")
            .unwrap();

        assert_eq!(form.data()["_mass_change_architect"], "on");
        assert_eq!(form.data()["_mass_change_architect_action"], "replace");
        assert_eq!(form.data()["architect"], "William Fife");
    }

    #[test]
    fn test_toggle_only_field_has_no_selector() {
        let registry = boats_registry().unwrap();
        let mut form = MassForm::open(&registry, BOAT, &[RecordId::new(1)]).unwrap();

        let result = form.set_action("length", "replace");
        assert!(matches!(result, Err(ScenarioError::ControlNotFound(_))));
    }

    #[test]
    fn test_excluded_field_has_no_toggle() {
        let registry = boats_registry().unwrap();
        let mut form = MassForm::open(&registry, BOAT, &[RecordId::new(1)]).unwrap();

        assert!(form.set_related("win_races", &[RecordId::new(1)]).is_err());
    }

    #[test]
    fn test_inline_rows_are_indexed() {
        let registry = boats_registry().unwrap();
        let mut form = MassForm::open(&registry, BOAT, &[RecordId::new(1)]).unwrap();

        form.set_inline(
            BOAT_TO_RACE,
            &[attrs! { "race" => RecordId::new(3) }, attrs! { "race" => RecordId::new(4) }],
        )
        .unwrap();

        assert_eq!(form.data()["boattorace_set-0-race"], "3");
        assert_eq!(form.data()["boattorace_set-1-race"], "4");
        assert_eq!(form.data()["_mass_change_boattorace_set"], "on");
    }
}
