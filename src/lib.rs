//! # printpick
//!
//! Deterministic printing selection for card decks.
//!
//! A deck list names logical cards ("2 Forest"); rendering it as exact
//! physical or digital objects means choosing one concrete printing per
//! card. This crate is that selection engine: given a deck, an ordered
//! sequence of preference criteria, and an availability constraint, it
//! deterministically picks one printing per logical card, falling back
//! through looser criteria when a strict preference cannot cover the
//! whole deck.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness is derived from a fixed salt and
//!    the deck's own content. Re-rolling the same deck shows the same
//!    printings, across runs and processes.
//!
//! 2. **Immutable values**: Decks, cards, and printings never mutate.
//!    Every transform returns a new deck; `im` keeps that cheap.
//!
//! 3. **Fail-safe**: A preference that cannot cover the deck degrades to
//!    a no-op, never a panic or a half-replaced deck. The one surfaced
//!    error is the forced replacer's broken coverage contract.
//!
//! ## Modules
//!
//! - `catalog`: Logical cards, printings, and the spoiler registry
//! - `deck`: The immutable sectioned-multiset deck value
//! - `choice`: Salted, deck-seeded reproducible shuffles and picks
//! - `select`: Availability policies, preference steps, the fallback
//!   engine, and the group/forced replacers
//! - `artist`: Artist-diversity grouping for basic-land art

pub mod artist;
pub mod catalog;
pub mod choice;
pub mod deck;
pub mod select;

// Re-export commonly used types
pub use crate::catalog::{
    AttributeKey, AttributeValue, Attributes, BasicLand, Card, CardId, CardVersion, Printing,
    PrintingId, Rarity, Spoiler,
};

pub use crate::deck::{Deck, DeckEntry, Element, Section, SectionKind};

pub use crate::choice::{Choice, ChoiceFactory, DeckChoice};

pub use crate::select::{
    Assignment, Availability, CoverageError, ForcedReplacer, GroupReplacer, PreferenceSequence,
    Step,
};

pub use crate::artist::{for_commander, ArtScope, ArtistGroup, ArtistGrouper};
