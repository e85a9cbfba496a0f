//! Seeded random boats and submissions for property tests.

use massedit_core::{RecordId, Value};
use massedit_mutation::{ActionVocabulary, MassAction};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ScenarioResult;
use crate::fixtures::{boat, Factory};

const WORDS: &[&str] = &["Pen", "Duick", "Vendredi", "Treize", "Kriter", "Manureva", " ", ""];
const ARCHITECTS: &[&str] = &["Bruce Farr", "William Fife", "Gilles Costantini", "   "];

/// Random fixture generator. The same seed always yields the same world.
pub struct RandomBoats {
    rng: StdRng,
}

impl RandomBoats {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create `captains` captains and `boats` boats with random attributes.
    pub fn populate(
        &mut self,
        factory: &mut Factory,
        captains: usize,
        boats: usize,
    ) -> ScenarioResult<Vec<RecordId>> {
        let labels: Vec<String> = (0..captains).map(|i| format!("c{i}")).collect();
        for label in &labels {
            factory.captain(label);
        }

        let mut ids = Vec::with_capacity(boats);
        for _ in 0..boats {
            let mut spec = boat()
                .name(self.text())
                .length(self.rng.gen_range(5.0..40.0))
                .rigging(self.rng.gen_range(1..=4))
                .previous_captains(self.subset(&labels));
            if self.rng.gen_bool(0.5) {
                if let Some(architect) = ARCHITECTS.choose(&mut self.rng) {
                    spec = spec.architect(*architect);
                }
            }
            ids.push(factory.boat(spec)?);
        }
        Ok(ids)
    }

    /// A short random phrase, sometimes blank.
    pub fn text(&mut self) -> String {
        let count = self.rng.gen_range(0..3);
        (0..count)
            .filter_map(|_| WORDS.choose(&mut self.rng).copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A random phrase that is never blank.
    pub fn name(&mut self) -> String {
        let text = self.text();
        if text.trim().is_empty() {
            WORDS[0].to_string()
        } else {
            text
        }
    }

    /// A random text value, or null.
    pub fn text_value(&mut self) -> Value {
        if self.rng.gen_bool(0.2) {
            Value::Null
        } else {
            Value::String(self.text())
        }
    }

    /// A random subset, keeping the input order.
    pub fn subset<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|_| self.rng.gen_bool(0.5))
            .cloned()
            .collect()
    }

    /// A random non-empty subset.
    pub fn pick<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let picked = self.subset(items);
        if picked.is_empty() {
            items.choose(&mut self.rng).cloned().into_iter().collect()
        } else {
            picked
        }
    }

    /// A random action from a vocabulary.
    pub fn action(&mut self, vocabulary: ActionVocabulary) -> MassAction {
        let actions = vocabulary.actions();
        actions[self.rng.gen_range(0..actions.len())]
    }

    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BOAT;

    #[test]
    fn test_same_seed_same_world() {
        let mut a = Factory::new().unwrap();
        let mut b = Factory::new().unwrap();
        RandomBoats::seeded(7).populate(&mut a, 3, 5).unwrap();
        RandomBoats::seeded(7).populate(&mut b, 3, 5).unwrap();

        let names = |f: &Factory| -> Vec<_> {
            f.store
                .records(BOAT)
                .map(|r| r.attributes.clone())
                .collect()
        };
        assert_eq!(names(&a), names(&b));
    }
}
