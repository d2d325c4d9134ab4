//! Forced basic-land replacement - exact or random-per-card.
//!
//! Unlike the preference engine, this path asserts that every basic land
//! in the deck *will* be replaced. A basic land with no mapped printing
//! is a broken contract, and the only condition in this crate that
//! surfaces to the caller as an error instead of a silent pass-through.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::catalog::{CardId, Printing, Spoiler};
use crate::choice::DeckChoice;
use crate::deck::Deck;

/// A forced-replacement coverage contract was broken.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// The deck contains a basic land with no replacement printing.
    #[error("no replacement printing provided for basic land {name}")]
    MissingBasic { name: String },
}

/// Replaces every basic land with an explicitly chosen printing.
#[derive(Clone, Debug, Default)]
pub struct ForcedReplacer {
    by_card: FxHashMap<CardId, Arc<Printing>>,
}

impl ForcedReplacer {
    /// Build a direct card-to-printing map from the given versions.
    ///
    /// When several versions share a card, the last one wins.
    #[must_use]
    pub fn from_versions(versions: impl IntoIterator<Item = Arc<Printing>>) -> Self {
        let mut by_card = FxHashMap::default();
        for version in versions {
            by_card.insert(version.card, version);
        }
        Self { by_card }
    }

    /// Build the map by picking one version per card reproducibly.
    ///
    /// Versions are grouped per card and sorted by printing ID first, so
    /// the pick depends only on the choice source, never on input order.
    /// Inherits `from_versions` coverage semantics.
    #[must_use]
    pub fn from_versions_chosen_randomly(
        versions: impl IntoIterator<Item = Arc<Printing>>,
        choice: &DeckChoice,
    ) -> Self {
        let mut by_card: FxHashMap<CardId, Vec<Arc<Printing>>> = FxHashMap::default();
        for version in versions {
            by_card.entry(version.card).or_default().push(version);
        }

        let picked = by_card.into_iter().filter_map(|(card, mut group)| {
            group.sort_by_key(|p| p.id);
            choice.for_card(card).pick(&group).map(Arc::clone)
        });
        Self::from_versions(picked)
    }

    /// The mapped printing for a card, if any.
    #[must_use]
    pub fn printing_for(&self, card: CardId) -> Option<&Arc<Printing>> {
        self.by_card.get(&card)
    }

    /// Replace every basic-land element with its mapped printing.
    ///
    /// Non-basic elements pass through. A basic land without a mapping
    /// fails the whole operation; no deck is returned.
    pub fn apply(&self, spoiler: &Spoiler, deck: &Deck) -> Result<Deck, CoverageError> {
        deck.try_transform(|element| {
            let card = element.card();
            let is_basic = spoiler.get(card).is_some_and(|c| c.is_basic());
            if !is_basic {
                return Ok(element.clone());
            }
            match self.by_card.get(&card) {
                Some(printing) => Ok(element.with_printing(Arc::clone(printing))),
                None => Err(CoverageError::MissingBasic {
                    name: spoiler
                        .get(card)
                        .map_or_else(|| card.to_string(), |c| c.name.clone()),
                }),
            }
        })
    }
}
