//! The preference-sequence engine.
//!
//! Tries preference steps in order, looking for one step that can fill
//! every slot of the deck under the availability policy. The first step
//! that fully succeeds wins; later steps are never consulted. When every
//! step fails and the mix-all fallback is enabled, a final pass pools
//! each card's candidates from all steps - still in step order, so
//! earlier steps keep priority even in the fallback.
//!
//! Within a step, ties among equally preferred candidates are broken by
//! shuffling the candidate list through the card's choice stream and
//! taking the first candidate the availability policy accepts. That
//! avoids systematic bias toward one printing while staying reproducible
//! for the same deck and salt.
//!
//! Soft misses never surface as errors: `apply` degrades to a no-op and
//! hands the original deck back.

use std::sync::Arc;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::availability::Availability;
use super::step::Step;
use crate::catalog::{CardId, CardVersion, Printing};
use crate::choice::{Choice, ChoiceFactory, DeckChoice};
use crate::deck::Deck;

/// Per-card chosen version for one resolution pass.
pub type Assignment<V> = FxHashMap<CardId, V>;

/// Ordered fallback sequence of preference steps.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use printpick::catalog::{CardId, Printing, PrintingId};
/// use printpick::choice::ChoiceFactory;
/// use printpick::deck::{Deck, DeckEntry, SectionKind};
/// use printpick::select::{Availability, PreferenceSequence, Step};
///
/// let old = Arc::new(Printing::new(PrintingId::new(1), CardId::new(1), "LEA"));
/// let new = Arc::new(Printing::new(PrintingId::new(2), CardId::new(1), "M21"));
/// let deck = Deck::new().with_section(SectionKind::Main, [DeckEntry::new(Arc::clone(&old), 4)]);
///
/// let sequence = PreferenceSequence::new(ChoiceFactory::with_salt(1), Availability::unlimited())
///     .with_step(Step::from_versions([Arc::clone(&new)]));
///
/// let resolved = sequence.apply(&deck);
/// let entry = &resolved.section(SectionKind::Main).unwrap().entries[0];
/// assert_eq!(entry.element.printing().set_code, "M21");
/// ```
#[derive(Clone, Debug)]
pub struct PreferenceSequence<V> {
    steps: Vec<Step<V>>,
    availability: Availability<V>,
    mix_all: bool,
    factory: ChoiceFactory,
}

impl<V: CardVersion + Clone> PreferenceSequence<V> {
    /// Create a sequence with no steps yet.
    #[must_use]
    pub fn new(factory: ChoiceFactory, availability: Availability<V>) -> Self {
        Self {
            steps: Vec::new(),
            availability,
            mix_all: false,
            factory,
        }
    }

    /// Append a step (builder pattern).
    #[must_use]
    pub fn with_step(mut self, step: Step<V>) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a step.
    pub fn push_step(&mut self, step: Step<V>) {
        self.steps.push(step);
    }

    /// Enable or disable the pooled mix-all fallback.
    #[must_use]
    pub fn with_mix_all(mut self, mix_all: bool) -> Self {
        self.mix_all = mix_all;
        self
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Find a full per-card assignment for the deck, or `None`.
    ///
    /// Only cards with at least one candidate in some step participate;
    /// everything else is left for the caller to pass through untouched.
    /// Cards are processed in `CardId` order, never in seed-dependent
    /// iteration order.
    #[must_use]
    pub fn resolve(&self, deck: &Deck) -> Option<Assignment<V>> {
        let wanted: Vec<(CardId, u32)> = deck
            .to_cards()
            .iter()
            .filter(|(card, _)| self.steps.iter().any(|step| step.covers(**card)))
            .map(|(card, count)| (*card, *count))
            .collect();
        if wanted.is_empty() {
            return None;
        }

        let deck_choice = self.factory.for_deck(deck);

        for (index, step) in self.steps.iter().enumerate() {
            let attempt = self.attempt(&wanted, &deck_choice, |card, choice| {
                choice.shuffle(step.candidates(card).to_vec())
            });
            if let Some(assignment) = attempt {
                debug!("preference step {} satisfied the whole deck", index);
                return Some(assignment);
            }
            trace!("preference step {} abandoned", index);
        }

        if self.mix_all {
            // Pool candidates per card, step order preserved: earlier
            // steps still outrank later ones, shuffling only breaks ties
            // within one step's list.
            let attempt = self.attempt(&wanted, &deck_choice, |card, choice| {
                self.steps
                    .iter()
                    .flat_map(|step| choice.shuffle(step.candidates(card).to_vec()))
                    .collect()
            });
            if let Some(assignment) = attempt {
                debug!("pooled fallback satisfied the whole deck");
                return Some(assignment);
            }
        }

        debug!("no preference step could satisfy the deck");
        None
    }

    /// Try one full assignment given a per-card candidate ordering.
    ///
    /// Any card without an acceptable candidate fails the whole attempt;
    /// partial assignments are discarded.
    fn attempt<F>(
        &self,
        wanted: &[(CardId, u32)],
        deck_choice: &DeckChoice,
        ordered_candidates: F,
    ) -> Option<Assignment<V>>
    where
        F: Fn(CardId, &Choice) -> Vec<V>,
    {
        let mut assignment = Assignment::default();
        for &(card, count) in wanted {
            let choice = deck_choice.for_card(card);
            let chosen = ordered_candidates(card, &choice)
                .into_iter()
                .find(|candidate| self.availability.accepts(candidate, count))?;
            assignment.insert(card, chosen);
        }
        Some(assignment)
    }
}

impl PreferenceSequence<Arc<Printing>> {
    /// Resolve and apply the assignment to the deck.
    ///
    /// Matched elements get their printing replaced (payload preserved);
    /// unmatched elements pass through. When resolution fails, the
    /// original deck is returned unchanged - never an error.
    #[must_use]
    pub fn apply(&self, deck: &Deck) -> Deck {
        match self.resolve(deck) {
            Some(assignment) => deck.transform(|element| {
                match assignment.get(&element.card()) {
                    Some(printing) => element.with_printing(Arc::clone(printing)),
                    None => element.clone(),
                }
            }),
            None => deck.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PrintingId;
    use crate::deck::{DeckEntry, SectionKind};

    fn printing(id: u32, card: u32, set: &str) -> Arc<Printing> {
        Arc::new(Printing::new(PrintingId::new(id), CardId::new(card), set))
    }

    fn deck_of(entries: Vec<(Arc<Printing>, u32)>) -> Deck {
        Deck::new().with_section(
            SectionKind::Main,
            entries.into_iter().map(|(p, n)| DeckEntry::new(p, n)),
        )
    }

    fn sequence(steps: Vec<Step<Arc<Printing>>>) -> PreferenceSequence<Arc<Printing>> {
        let mut sequence =
            PreferenceSequence::new(ChoiceFactory::with_salt(42), Availability::unlimited());
        for step in steps {
            sequence.push_step(step);
        }
        sequence
    }

    #[test]
    fn test_first_step_wins() {
        let in_deck = printing(1, 1, "OLD");
        let preferred = printing(2, 1, "NEW");
        let fallback = printing(3, 1, "ALT");

        let sequence = sequence(vec![
            Step::from_versions([Arc::clone(&preferred)]),
            Step::from_versions([fallback]),
        ]);

        let assignment = sequence.resolve(&deck_of(vec![(in_deck, 4)])).unwrap();
        assert_eq!(assignment[&CardId::new(1)].id, PrintingId::new(2));
    }

    #[test]
    fn test_step_fails_if_any_card_uncovered() {
        // Step 1 covers card 1 only; the deck also holds card 2, which
        // step 2 covers. Step 1 must be abandoned wholesale.
        let a = printing(1, 1, "OLD");
        let b = printing(2, 2, "OLD");
        let step1 = Step::from_versions([printing(3, 1, "NEW")]);
        let step2 = Step::from_versions([printing(4, 1, "ALT"), printing(5, 2, "ALT")]);

        let sequence = sequence(vec![step1, step2]);
        let assignment = sequence.resolve(&deck_of(vec![(a, 4), (b, 2)])).unwrap();

        assert_eq!(assignment[&CardId::new(1)].set_code, "ALT");
        assert_eq!(assignment[&CardId::new(2)].set_code, "ALT");
    }

    #[test]
    fn test_availability_gates_candidates() {
        let in_deck = printing(1, 1, "OLD");
        let scarce = printing(2, 1, "NEW");
        let plentiful = printing(3, 1, "ALT");

        let mut supply = FxHashMap::default();
        supply.insert(PrintingId::new(2), 2);
        supply.insert(PrintingId::new(3), 4);

        let sequence = PreferenceSequence::new(
            ChoiceFactory::with_salt(42),
            Availability::printing_supply(supply),
        )
        .with_step(Step::from_versions([scarce]))
        .with_step(Step::from_versions([plentiful]));

        // 4 copies wanted: step 1's printing can only supply 2.
        let assignment = sequence.resolve(&deck_of(vec![(in_deck, 4)])).unwrap();
        assert_eq!(assignment[&CardId::new(1)].id, PrintingId::new(3));
    }

    #[test]
    fn test_resolve_returns_none_when_nothing_matches() {
        let in_deck = printing(1, 1, "OLD");
        let unrelated = Step::from_versions([printing(2, 9, "NEW")]);

        let sequence = sequence(vec![unrelated]);
        assert!(sequence.resolve(&deck_of(vec![(in_deck, 4)])).is_none());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let in_deck = printing(1, 1, "OLD");
        let candidates: Vec<_> = (10..20).map(|i| printing(i, 1, "NEW")).collect();
        let sequence = sequence(vec![Step::from_versions(candidates)]);
        let deck = deck_of(vec![(in_deck, 4)]);

        let first = sequence.resolve(&deck).unwrap();
        for _ in 0..5 {
            assert_eq!(
                sequence.resolve(&deck).unwrap()[&CardId::new(1)].id,
                first[&CardId::new(1)].id
            );
        }
    }

    #[test]
    fn test_mix_all_pools_across_steps() {
        // Neither step covers both cards; pooling does.
        let a = printing(1, 1, "OLD");
        let b = printing(2, 2, "OLD");
        let step1 = Step::from_versions([printing(3, 1, "NEW")]);
        let step2 = Step::from_versions([printing(4, 2, "NEW")]);

        let strict = sequence(vec![step1.clone(), step2.clone()]);
        assert!(strict
            .resolve(&deck_of(vec![(Arc::clone(&a), 4), (Arc::clone(&b), 2)]))
            .is_none());

        let pooled = sequence(vec![step1, step2]).with_mix_all(true);
        let assignment = pooled.resolve(&deck_of(vec![(a, 4), (b, 2)])).unwrap();
        assert_eq!(assignment[&CardId::new(1)].id, PrintingId::new(3));
        assert_eq!(assignment[&CardId::new(2)].id, PrintingId::new(4));
    }

    #[test]
    fn test_mix_all_keeps_step_priority() {
        // Card 1 is covered by both steps; the pooled pass must still
        // prefer step 1's candidate.
        let a = printing(1, 1, "OLD");
        let b = printing(2, 2, "OLD");
        let step1 = Step::from_versions([printing(3, 1, "FIRST")]);
        let step2 = Step::from_versions([printing(4, 1, "SECOND")]);
        let only_b = Step::from_versions([printing(5, 2, "SECOND")]);

        let sequence = sequence(vec![step1, step2, only_b]).with_mix_all(true);
        let assignment = sequence.resolve(&deck_of(vec![(a, 4), (b, 2)])).unwrap();
        assert_eq!(assignment[&CardId::new(1)].set_code, "FIRST");
    }

    #[test]
    fn test_apply_replaces_and_preserves_counts() {
        let in_deck = printing(1, 1, "OLD");
        let replacement = printing(2, 1, "NEW");
        let deck = deck_of(vec![(in_deck, 4)]);

        let sequence = sequence(vec![Step::from_versions([replacement])]);
        let out = sequence.apply(&deck);

        assert_eq!(out.size(), 4);
        let entry = &out.section(SectionKind::Main).unwrap().entries[0];
        assert_eq!(entry.element.printing().set_code, "NEW");
        assert_eq!(entry.count, 4);
    }

    #[test]
    fn test_apply_is_a_noop_on_failure() {
        let in_deck = printing(1, 1, "OLD");
        let deck = deck_of(vec![(in_deck, 4)]);

        let sequence = sequence(vec![Step::from_versions([printing(2, 9, "NEW")])]);
        let out = sequence.apply(&deck);

        assert_eq!(out.size(), 4);
        let entry = &out.section(SectionKind::Main).unwrap().entries[0];
        assert_eq!(entry.element.printing().id, PrintingId::new(1));
    }

    #[test]
    fn test_apply_leaves_unmatched_elements_alone() {
        let covered = printing(1, 1, "OLD");
        let uncovered = printing(2, 2, "OLD");
        let deck = deck_of(vec![(covered, 4), (uncovered, 3)]);

        let sequence = sequence(vec![Step::from_versions([printing(3, 1, "NEW")])]);
        let out = sequence.apply(&deck);

        let entries = &out.section(SectionKind::Main).unwrap().entries;
        assert_eq!(entries[0].element.printing().set_code, "NEW");
        assert_eq!(entries[1].element.printing().set_code, "OLD");
    }
}
