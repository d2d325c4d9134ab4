//! Group replacement with availability - the non-fallback sibling.
//!
//! For an arbitrary predicate-selected subset of the deck's cards (not
//! restricted to basics), pick one printing per distinct card
//! independently: shuffle the card's candidates, take the first that
//! meets availability at the card's deck-wide count. There is no
//! multi-step fallback: if any matched card has no satisfying candidate
//! the whole batch is abandoned and the original deck comes back
//! unchanged. No partial replacement ever leaks through.

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use super::availability::Availability;
use crate::catalog::{Card, CardId, Printing, Spoiler};
use crate::choice::ChoiceFactory;
use crate::deck::Deck;

/// One-pass replacement over a predicate-selected card group.
#[derive(Clone, Debug)]
pub struct GroupReplacer {
    availability: Availability<Arc<Printing>>,
    factory: ChoiceFactory,
}

impl GroupReplacer {
    /// Create a replacer.
    #[must_use]
    pub fn new(factory: ChoiceFactory, availability: Availability<Arc<Printing>>) -> Self {
        Self {
            availability,
            factory,
        }
    }

    /// Replace every element whose card matches the predicate.
    ///
    /// All-or-nothing: one unsatisfiable card aborts the batch and the
    /// input deck is returned as-is.
    #[must_use]
    pub fn apply<P, F>(&self, spoiler: &Spoiler, deck: &Deck, predicate: P, extractor: F) -> Deck
    where
        P: Fn(&Card) -> bool,
        F: Fn(&Card) -> Vec<Arc<Printing>>,
    {
        // to_cards iterates in CardId order, so the per-index choice
        // streams are stable for a given deck.
        let matched: Vec<(&Card, u32)> = deck
            .to_cards()
            .iter()
            .filter_map(|(id, count)| spoiler.get(*id).map(|card| (card, *count)))
            .filter(|(card, _)| predicate(card))
            .collect();
        if matched.is_empty() {
            return deck.clone();
        }

        let deck_choice = self.factory.for_deck(deck);
        let mut assignment: FxHashMap<CardId, Arc<Printing>> = FxHashMap::default();

        for (index, &(card, count)) in matched.iter().enumerate() {
            let shuffled = deck_choice.for_index(index as u64).shuffle(extractor(card));
            match shuffled
                .into_iter()
                .find(|candidate| self.availability.accepts(candidate, count))
            {
                Some(printing) => {
                    assignment.insert(card.id, printing);
                }
                None => {
                    debug!("group replacement abandoned: nothing supplies {}", card.name);
                    return deck.clone();
                }
            }
        }

        deck.transform(|element| match assignment.get(&element.card()) {
            Some(printing) => element.with_printing(Arc::clone(printing)),
            None => element.clone(),
        })
    }
}
