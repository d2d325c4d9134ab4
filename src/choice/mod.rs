//! Deterministic choice source for reproducible tie-breaking.
//!
//! Re-rolling the same deck must show the same printings, so nothing in
//! the engine draws external entropy. Every shuffle and pick is a pure
//! function of three things:
//!
//! - a **salt**: a fixed per-call-site constant, so different features
//!   using the same deck do not correlate
//! - the **deck fingerprint**: a stable hash of the deck's logical-card
//!   multiset
//! - a **key**: the card or index the choice is being made for, so
//!   different cards in one deck get independent streams
//!
//! Seed mixing uses `DefaultHasher` over those inputs, and each call
//! re-seeds a fresh ChaCha8 stream, so repeated calls with identical
//! inputs yield identical output across runs and processes. The mixing
//! function is not a cross-implementation contract.
//!
//! ## Example
//!
//! ```
//! use printpick::choice::ChoiceFactory;
//! use printpick::deck::Deck;
//!
//! let factory = ChoiceFactory::with_salt(0x1157);
//! let deck = Deck::new();
//!
//! let a = factory.for_deck(&deck).for_index(0).shuffle(vec![1, 2, 3, 4]);
//! let b = factory.for_deck(&deck).for_index(0).shuffle(vec![1, 2, 3, 4]);
//! assert_eq!(a, b);
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::CardId;
use crate::deck::Deck;

/// Entry point: a salted source of deck-scoped choices.
#[derive(Clone, Copy, Debug)]
pub struct ChoiceFactory {
    salt: u64,
}

impl ChoiceFactory {
    /// Create a factory with a fixed per-call-site salt.
    #[must_use]
    pub const fn with_salt(salt: u64) -> Self {
        Self { salt }
    }

    /// Derive the choice source for one deck.
    ///
    /// The fingerprint covers the deck's logical-card multiset: two decks
    /// with the same cards and counts get the same streams, regardless of
    /// which printings currently fill the slots.
    #[must_use]
    pub fn for_deck(&self, deck: &Deck) -> DeckChoice {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.salt.hash(&mut hasher);
        for (card, count) in &deck.to_cards() {
            card.raw().hash(&mut hasher);
            count.hash(&mut hasher);
        }
        DeckChoice {
            seed: hasher.finish(),
        }
    }
}

/// Choice source scoped to one deck.
#[derive(Clone, Copy, Debug)]
pub struct DeckChoice {
    seed: u64,
}

impl DeckChoice {
    /// The choice stream for one logical card.
    #[must_use]
    pub fn for_card(&self, card: CardId) -> Choice {
        self.keyed("card", u64::from(card.raw()))
    }

    /// The choice stream for an index within one pass.
    ///
    /// Index streams are independent of card streams even when the raw
    /// values collide.
    #[must_use]
    pub fn for_index(&self, index: u64) -> Choice {
        self.keyed("index", index)
    }

    /// A fixed-size array of independent choices, keyed by position.
    #[must_use]
    pub fn array(&self, n: usize) -> Vec<Choice> {
        (0..n as u64).map(|i| self.for_index(i)).collect()
    }

    fn keyed(&self, domain: &str, key: u64) -> Choice {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.seed.hash(&mut hasher);
        domain.hash(&mut hasher);
        key.hash(&mut hasher);
        Choice {
            seed: hasher.finish(),
        }
    }
}

/// One reproducible choice stream.
///
/// Every operation seeds a fresh generator, so a `Choice` has no mutable
/// state: calling `shuffle` twice with the same list gives the same
/// permutation.
#[derive(Clone, Copy, Debug)]
pub struct Choice {
    seed: u64,
}

impl Choice {
    fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    /// Return the list in a reproducible pseudo-random order.
    #[must_use]
    pub fn shuffle<T>(&self, mut items: Vec<T>) -> Vec<T> {
        items.shuffle(&mut self.rng());
        items
    }

    /// Pick one element reproducibly. Empty lists yield `None`.
    #[must_use]
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng())
    }
}
