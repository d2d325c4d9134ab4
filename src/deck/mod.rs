//! Deck values: sectioned multisets of printable elements.
//!
//! ## Key Types
//!
//! - `Element`: one deck slot - a printing, optionally with caller payload
//! - `DeckEntry`: an element with a multiset count
//! - `Section` / `SectionKind`: main, commander, sideboard
//! - `Deck`: the immutable sectioned multiset, with transform operations
//!
//! Decks are immutable values; transforms return new decks and preserve
//! per-section counts unless the caller explicitly re-counts.

#[allow(clippy::module_inception)]
pub mod deck;
pub mod element;

pub use deck::{Deck, DeckEntry, Section, SectionKind};
pub use element::Element;
