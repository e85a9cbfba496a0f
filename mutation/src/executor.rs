//! Mass-edit executor - coordinates one request.
//!
//! Execution happens in two phases. Planning validates every active field
//! and inline against the registry (field exists, action offered, value
//! well-typed). The store is then checked for every target and every record
//! a submitted foreign key or relation member points at. Nothing is written
//! until the whole request passes. Application then walks the planned fields in
//! declaration order and, for each one, every target in selection order,
//! delegating the per-record computation to [`apply`].

use massedit_core::{Attributes, FieldKind, FieldValue, RecordId};
use massedit_registry::{ModelDef, Registry};
use massedit_store::RecordStore;

use crate::action::MassAction;
use crate::applicator::{apply, Resolved};
use crate::error::{MutationError, MutationResult};
use crate::request::MassEditRequest;
use crate::resolver::resolve;
use crate::result::{FieldOutcome, MassEditOutcome};
use crate::validation;

/// A validated field, ready to apply.
struct PlannedField<'q> {
    name: &'q str,
    kind: FieldKind,
    action: MassAction,
    new_value: &'q FieldValue,
}

/// A validated inline, ready to apply.
struct PlannedInline<'q> {
    name: &'q str,
    rows: &'q [Attributes],
}

/// A submitted record reference that must resolve before any write.
struct Reference {
    field: String,
    model: String,
    id: RecordId,
}

#[derive(Default)]
struct Plan<'q> {
    fields: Vec<PlannedField<'q>>,
    inlines: Vec<PlannedInline<'q>>,
    references: Vec<Reference>,
    skipped: Vec<String>,
}

impl Plan<'_> {
    fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.inlines.is_empty()
    }
}

/// Mass-edit executor.
pub struct MassEditExecutor<'r, 's, S: RecordStore> {
    registry: &'r Registry,
    store: &'s mut S,
}

impl<'r, 's, S: RecordStore> MassEditExecutor<'r, 's, S> {
    /// Create a new executor.
    pub fn new(registry: &'r Registry, store: &'s mut S) -> Self {
        Self { registry, store }
    }

    /// Execute a request against the store.
    ///
    /// An empty selection, or a submission with every toggle unchecked,
    /// succeeds without touching any record.
    pub fn execute(&mut self, request: &MassEditRequest) -> MutationResult<MassEditOutcome> {
        let model = self
            .registry
            .get_model(&request.model)
            .ok_or_else(|| MutationError::unknown_model(&request.model))?;

        let plan = plan(model, request).inspect_err(|e| {
            tracing::warn!(model = %model.name, error = %e, "mass edit rejected");
        })?;

        let mut outcome = MassEditOutcome {
            targets: request.target_ids.clone(),
            skipped: plan.skipped.clone(),
            ..MassEditOutcome::default()
        };

        if request.target_ids.is_empty() {
            tracing::debug!(model = %model.name, "no targets selected, nothing to do");
            return Ok(outcome);
        }
        if plan.is_empty() {
            tracing::debug!(model = %model.name, "no field toggled, nothing to do");
            return Ok(outcome);
        }

        for &id in &request.target_ids {
            if !self.store.contains(&model.name, id) {
                let e = MutationError::record_not_found(&model.name, id);
                tracing::warn!(model = %model.name, error = %e, "mass edit rejected");
                return Err(e);
            }
        }
        for reference in &plan.references {
            if !self.store.contains(&reference.model, reference.id) {
                let e = MutationError::unknown_reference(
                    &reference.field,
                    &reference.model,
                    reference.id,
                );
                tracing::warn!(model = %model.name, error = %e, "mass edit rejected");
                return Err(e);
            }
        }

        for field in &plan.fields {
            let changed = self.apply_field(&model.name, field, &request.target_ids)?;
            tracing::debug!(
                model = %model.name,
                field = field.name,
                action = %field.action,
                targets = request.target_ids.len(),
                changed = changed.len(),
                "field applied"
            );
            outcome.fields.push(FieldOutcome {
                field: field.name.to_string(),
                action: field.action,
                changed,
            });
        }

        for inline in &plan.inlines {
            for &id in &request.target_ids {
                self.store
                    .commit_children(&model.name, id, inline.name, inline.rows.to_vec())?;
            }
            tracing::debug!(
                model = %model.name,
                inline = inline.name,
                rows = inline.rows.len(),
                "inline replaced"
            );
            outcome.inlines.push(inline.name.to_string());
        }

        Ok(outcome)
    }

    /// Apply one planned field to every target, returning the changed ones.
    fn apply_field(
        &mut self,
        model: &str,
        field: &PlannedField<'_>,
        targets: &[RecordId],
    ) -> MutationResult<Vec<RecordId>> {
        let mut changed = Vec::new();

        for &id in targets {
            let current = self.current_value(model, id, field)?;
            let resolved = apply(field.action, field.kind, &current, field.new_value)?;

            if !resolved.changes(&current) {
                tracing::trace!(model, %id, field = field.name, "unchanged");
                continue;
            }

            match resolved {
                Resolved::Value(value) => {
                    self.store.commit_value(model, id, field.name, value)?
                }
                Resolved::Relation(delta) => {
                    self.store.commit_relation(model, id, field.name, &delta)?
                }
            }
            tracing::trace!(model, %id, field = field.name, "updated");
            changed.push(id);
        }

        Ok(changed)
    }

    fn current_value(
        &self,
        model: &str,
        id: RecordId,
        field: &PlannedField<'_>,
    ) -> MutationResult<FieldValue> {
        let value = if field.kind.is_multi() {
            FieldValue::Related(self.store.relation(model, id, field.name)?)
        } else {
            FieldValue::Scalar(self.store.value(model, id, field.name)?)
        };
        Ok(value)
    }
}

/// Validate the request and order the work.
fn plan<'q>(model: &ModelDef, request: &'q MassEditRequest) -> MutationResult<Plan<'q>> {
    let mut plan = Plan::default();

    for (name, change) in &request.fields {
        if !change.active {
            plan.skipped.push(name.clone());
            continue;
        }
        let field = model
            .get_editable_field(name)
            .ok_or_else(|| MutationError::unknown_field(&model.name, name))?;

        let action = resolve(&field.descriptor()).effective_action(name, change.action)?;
        validation::validate_new_value(field, action, &change.new_value)?;

        if let Some(related) = &field.related_model {
            let ids: Vec<RecordId> = match &change.new_value {
                FieldValue::Scalar(value) => value.as_ref_id().into_iter().collect(),
                FieldValue::Related(set) => set.iter().copied().collect(),
            };
            plan.references.extend(ids.into_iter().map(|id| Reference {
                field: name.clone(),
                model: related.clone(),
                id,
            }));
        }

        plan.fields.push(PlannedField {
            name,
            kind: field.kind,
            action,
            new_value: &change.new_value,
        });
    }

    // Apply in declaration order, not submission order
    let position = |name: &str| model.fields.iter().position(|f| f.name == name);
    plan.fields.sort_by_key(|f| position(f.name));

    for (name, change) in &request.inlines {
        if !change.active {
            plan.skipped.push(name.clone());
            continue;
        }
        let inline = model
            .get_inline(name)
            .ok_or_else(|| MutationError::unknown_inline(&model.name, name))?;

        for row in &change.rows {
            for (column, value) in row {
                let def = inline
                    .get_column(column)
                    .ok_or_else(|| MutationError::unknown_field(&inline.name, column))?;
                validation::validate_scalar(def, value)?;
                if let (Some(related), Some(id)) = (&def.related_model, value.as_ref_id()) {
                    plan.references.push(Reference {
                        field: format!("{}.{}", inline.name, column),
                        model: related.clone(),
                        id,
                    });
                }
            }
        }

        plan.inlines.push(PlannedInline {
            name,
            rows: &change.rows,
        });
    }

    Ok(plan)
}
