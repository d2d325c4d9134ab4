//! Preference steps - one stage of the fallback sequence.
//!
//! A step maps each logical card to the ordered list of printings
//! admissible at that stage. Steps are built once, checked eagerly,
//! and never mutated afterwards.

use rustc_hash::FxHashMap;

use crate::catalog::{CardId, CardVersion};

/// One stage of fallback preference.
#[derive(Clone, Debug, Default)]
pub struct Step<V> {
    candidates: FxHashMap<CardId, Vec<V>>,
}

impl<V: CardVersion> Step<V> {
    /// Create an empty step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: FxHashMap::default(),
        }
    }

    /// Build a step by grouping versions under their owning cards.
    #[must_use]
    pub fn from_versions(versions: impl IntoIterator<Item = V>) -> Self {
        let mut step = Self::new();
        for version in versions {
            step.candidates.entry(version.card()).or_default().push(version);
        }
        step
    }

    /// Add candidates for one card.
    ///
    /// Panics if any candidate belongs to a different card - that is a
    /// construction bug, not a runtime availability condition.
    pub fn insert(&mut self, card: CardId, candidates: Vec<V>) {
        for candidate in &candidates {
            if candidate.card() != card {
                panic!(
                    "Candidate for {} indexed under {}",
                    candidate.card(),
                    card
                );
            }
        }
        self.candidates.entry(card).or_default().extend(candidates);
    }

    /// The step's candidate list for a card. Empty for uncovered cards.
    #[must_use]
    pub fn candidates(&self, card: CardId) -> &[V] {
        self.candidates.get(&card).map_or(&[], Vec::as_slice)
    }

    /// Whether the step has any candidate for a card.
    #[must_use]
    pub fn covers(&self, card: CardId) -> bool {
        !self.candidates(card).is_empty()
    }

    /// Whether the step has no candidates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.values().all(Vec::is_empty)
    }
}
