//! Artist-diversity grouping for basic-land art selection.
//!
//! Given a scope of logical cards (usually basics) and a list of
//! edition-level predicates (usually "printed in this expansion"), the
//! grouper partitions the eligible printings by credited artist and
//! emits one preference step per artist group, **smallest group first**.
//! Preferring scarce artists spreads exposure: an artist who drew one
//! Forest gets that Forest shown before an artist who drew three.
//!
//! Ties between equally sized groups are broken by the deck-seeded
//! choice source, so the ordering is random but reproducible. Each
//! configured predicate gets an independently keyed choice stream, and
//! the resulting steps are concatenated in predicate order into one
//! preference sequence.
//!
//! `for_commander` is the named convenience: when a deck's commander
//! section resolves to exactly one expansion, basics are regrouped to
//! that expansion's artists, with the mix-all fallback on so the
//! transform never fails to act.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use log::debug;

use crate::catalog::{BasicLand, Card, Printing, Spoiler};
use crate::choice::{Choice, ChoiceFactory};
use crate::deck::{Deck, SectionKind};
use crate::select::{Availability, PreferenceSequence, Step};

/// Which logical cards the grouper works over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtScope {
    /// One basic land type, non-snow.
    Basic(BasicLand),
    /// The snow-covered variant of one basic land type.
    SnowCovered(BasicLand),
    /// Every basic land, snow included.
    AllBasics,
    /// Reserved. Resolving this scope panics.
    AllCards,
}

impl ArtScope {
    /// The in-scope cards, in `CardId` order.
    ///
    /// Panics on `AllCards` - that scope is reserved and unsupported.
    #[must_use]
    pub fn cards<'a>(&self, spoiler: &'a Spoiler) -> Vec<&'a Card> {
        let mut cards: Vec<&Card> = match self {
            ArtScope::Basic(land) => spoiler
                .basic_lands()
                .filter(|c| c.basic == Some(*land) && !c.snow)
                .collect(),
            ArtScope::SnowCovered(land) => spoiler
                .basic_lands()
                .filter(|c| c.basic == Some(*land) && c.snow)
                .collect(),
            ArtScope::AllBasics => spoiler.basic_lands().collect(),
            ArtScope::AllCards => panic!("all-cards scope is reserved and not supported"),
        };
        cards.sort_by_key(|c| c.id);
        cards
    }
}

/// The printings one artist contributed under one predicate.
#[derive(Clone, Debug)]
pub struct ArtistGroup {
    pub artist: String,
    pub printings: Vec<Arc<Printing>>,
}

/// Builds artist-diverse preference sequences.
pub struct ArtistGrouper {
    scope: ArtScope,
    predicates: Vec<Box<dyn Fn(&Printing) -> bool>>,
    mix_all: bool,
    factory: ChoiceFactory,
}

impl ArtistGrouper {
    /// Create a grouper over a scope.
    #[must_use]
    pub fn new(scope: ArtScope, factory: ChoiceFactory) -> Self {
        Self {
            scope,
            predicates: Vec::new(),
            mix_all: false,
            factory,
        }
    }

    /// Add an edition-level predicate (builder pattern).
    #[must_use]
    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Printing) -> bool + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Add a "printed in this expansion" predicate (builder pattern).
    #[must_use]
    pub fn with_set(self, set_code: impl Into<String>) -> Self {
        let set_code = set_code.into();
        self.with_predicate(move |printing| printing.set_code == set_code)
    }

    /// Enable or disable the mix-all fallback (builder pattern).
    #[must_use]
    pub fn with_mix_all(mut self, mix_all: bool) -> Self {
        self.mix_all = mix_all;
        self
    }

    /// Partition the in-scope printings matching a predicate by artist.
    ///
    /// Groups come back in artist-name order; callers wanting the
    /// smallest-first selection order go through `ordered_groups`.
    /// Panics if a matched printing does not credit exactly one artist -
    /// that is bad catalog data, not an availability condition.
    #[must_use]
    pub fn artist_groups<F>(
        &self,
        spoiler: &Spoiler,
        extractor: &F,
        predicate: &dyn Fn(&Printing) -> bool,
    ) -> Vec<ArtistGroup>
    where
        F: Fn(&Card) -> Vec<Arc<Printing>>,
    {
        let mut groups: BTreeMap<String, Vec<Arc<Printing>>> = BTreeMap::new();
        for card in self.scope.cards(spoiler) {
            for printing in extractor(card) {
                if !predicate(&printing) {
                    continue;
                }
                let artist = match printing.sole_artist() {
                    Some(artist) => artist.to_string(),
                    None => panic!(
                        "{} must credit exactly one artist, has {}",
                        printing.id,
                        printing.artists.len()
                    ),
                };
                groups.entry(artist).or_default().push(printing);
            }
        }
        groups
            .into_iter()
            .map(|(artist, printings)| ArtistGroup { artist, printings })
            .collect()
    }

    /// Order groups for selection: ascending size, random among ties.
    ///
    /// The random permutation happens first and the size sort is stable,
    /// so equal-sized groups keep their shuffled order.
    #[must_use]
    pub fn ordered_groups(groups: Vec<ArtistGroup>, choice: &Choice) -> Vec<ArtistGroup> {
        let mut groups = choice.shuffle(groups);
        groups.sort_by_key(|group| group.printings.len());
        groups
    }

    /// Build the preference sequence for one deck.
    ///
    /// One step per group, predicates concatenated in configuration
    /// order. Availability is unlimited: art variety for basics is an
    /// ordering concern, not a print-run scarcity one.
    #[must_use]
    pub fn sequence<F>(
        &self,
        spoiler: &Spoiler,
        extractor: &F,
        deck: &Deck,
    ) -> PreferenceSequence<Arc<Printing>>
    where
        F: Fn(&Card) -> Vec<Arc<Printing>>,
    {
        let deck_choice = self.factory.for_deck(deck);
        let mut sequence = PreferenceSequence::new(self.factory, Availability::unlimited())
            .with_mix_all(self.mix_all);

        for (index, predicate) in self.predicates.iter().enumerate() {
            let groups = self.artist_groups(spoiler, extractor, predicate.as_ref());
            let ordered = Self::ordered_groups(groups, &deck_choice.for_index(index as u64));
            for group in ordered {
                sequence.push_step(Step::from_versions(group.printings));
            }
        }
        sequence
    }

    /// Build the sequence and apply it to the deck.
    #[must_use]
    pub fn apply<F>(&self, spoiler: &Spoiler, extractor: &F, deck: &Deck) -> Deck
    where
        F: Fn(&Card) -> Vec<Arc<Printing>>,
    {
        self.sequence(spoiler, extractor, deck).apply(deck)
    }
}

/// Regroup a deck's basic-land art around its commander's expansion.
///
/// When the commander section's printings come from exactly one
/// expansion, all basics are regrouped to that expansion's artists with
/// the mix-all fallback enabled, so the transform always acts. A deck
/// whose commander section spans zero or several expansions passes
/// through unchanged.
#[must_use]
pub fn for_commander<F>(
    spoiler: &Spoiler,
    factory: ChoiceFactory,
    extractor: &F,
    deck: &Deck,
) -> Deck
where
    F: Fn(&Card) -> Vec<Arc<Printing>>,
{
    let Some(commander) = deck.section(SectionKind::Commander) else {
        return deck.clone();
    };

    let sets: BTreeSet<String> = commander
        .entries
        .iter()
        .map(|entry| entry.element.printing().set_code.clone())
        .collect();

    let mut sets = sets.into_iter();
    let (Some(set_code), None) = (sets.next(), sets.next()) else {
        debug!("commander section spans zero or several expansions; deck unchanged");
        return deck.clone();
    };

    ArtistGrouper::new(ArtScope::AllBasics, factory)
        .with_set(set_code)
        .with_mix_all(true)
        .apply(spoiler, extractor, deck)
}
