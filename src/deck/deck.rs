//! Decks - immutable sectioned multisets of elements.
//!
//! A deck is an ordered list of sections (main, commander, sideboard),
//! each a multiset of elements with counts. Decks are values: every
//! transform produces a new deck and leaves the input untouched. `im`
//! structures keep those copies cheap.
//!
//! Transforms preserve per-section counts; only `transform_cards` can
//! merge or re-count entries, and only because the caller asked it to.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::element::Element;
use crate::catalog::CardId;

/// Which section of the deck an entry lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Main,
    Commander,
    Sideboard,
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SectionKind::Main => "main",
            SectionKind::Commander => "commander",
            SectionKind::Sideboard => "sideboard",
        };
        f.write_str(name)
    }
}

/// One multiset entry: an element with a count.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckEntry {
    pub element: Element,
    pub count: u32,
}

impl DeckEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(element: impl Into<Element>, count: u32) -> Self {
        Self {
            element: element.into(),
            count,
        }
    }
}

/// One deck section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub entries: Vector<DeckEntry>,
}

impl Section {
    /// Create a section from entries.
    #[must_use]
    pub fn new(kind: SectionKind, entries: impl IntoIterator<Item = DeckEntry>) -> Self {
        Self {
            kind,
            entries: entries.into_iter().collect(),
        }
    }

    /// Total card count in this section.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// An immutable deck value.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use printpick::catalog::{CardId, Printing, PrintingId};
/// use printpick::deck::{Deck, DeckEntry, SectionKind};
///
/// let forest = Arc::new(Printing::new(PrintingId::new(1), CardId::new(1), "ZEN"));
/// let deck = Deck::new().with_section(SectionKind::Main, [DeckEntry::new(forest, 4)]);
///
/// assert_eq!(deck.size(), 4);
/// assert_eq!(deck.card_count(CardId::new(1)), 4);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    sections: Vector<Section>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section (builder pattern).
    #[must_use]
    pub fn with_section(
        mut self,
        kind: SectionKind,
        entries: impl IntoIterator<Item = DeckEntry>,
    ) -> Self {
        self.sections.push_back(Section::new(kind, entries));
        self
    }

    /// Iterate over sections in order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Get a section by kind.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Total card count across all sections.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.sections.iter().map(Section::size).sum()
    }

    /// Deck-wide count of one logical card.
    #[must_use]
    pub fn card_count(&self, card: CardId) -> u32 {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .filter(|e| e.element.card() == card)
            .map(|e| e.count)
            .sum()
    }

    /// Project the deck onto a plain multiset of logical cards.
    ///
    /// Counts are summed across sections. The result iterates in
    /// `CardId` order, so passes over it are deterministic.
    #[must_use]
    pub fn to_cards(&self) -> OrdMap<CardId, u32> {
        let mut cards = OrdMap::new();
        for section in &self.sections {
            for entry in &section.entries {
                *cards.entry(entry.element.card()).or_insert(0) += entry.count;
            }
        }
        cards
    }

    /// Map every element, preserving sections and counts.
    #[must_use]
    pub fn transform<F>(&self, mapper: F) -> Deck
    where
        F: Fn(&Element) -> Element,
    {
        self.transform_cards(|entry| DeckEntry {
            element: mapper(&entry.element),
            count: entry.count,
        })
    }

    /// Map every element fallibly, preserving sections and counts.
    ///
    /// The first error aborts and propagates; no partial deck escapes.
    pub fn try_transform<F, E>(&self, mapper: F) -> Result<Deck, E>
    where
        F: Fn(&Element) -> Result<Element, E>,
    {
        let mut sections = Vector::new();
        for section in &self.sections {
            let mut entries = Vector::new();
            for entry in &section.entries {
                entries.push_back(DeckEntry {
                    element: mapper(&entry.element)?,
                    count: entry.count,
                });
            }
            sections.push_back(Section {
                kind: section.kind,
                entries,
            });
        }
        Ok(Deck { sections })
    }

    /// Map every element, dropping entries the mapper returns `None` for.
    #[must_use]
    pub fn flat_transform<F>(&self, mapper: F) -> Deck
    where
        F: Fn(&Element) -> Option<Element>,
    {
        let sections = self
            .sections
            .iter()
            .map(|section| Section {
                kind: section.kind,
                entries: section
                    .entries
                    .iter()
                    .filter_map(|entry| {
                        mapper(&entry.element).map(|element| DeckEntry {
                            element,
                            count: entry.count,
                        })
                    })
                    .collect(),
            })
            .collect();
        Deck { sections }
    }

    /// Map whole multiset entries, counts included.
    ///
    /// This is the one transform allowed to change counts.
    #[must_use]
    pub fn transform_cards<F>(&self, mapper: F) -> Deck
    where
        F: Fn(&DeckEntry) -> DeckEntry,
    {
        let sections = self
            .sections
            .iter()
            .map(|section| Section {
                kind: section.kind,
                entries: section.entries.iter().map(&mapper).collect(),
            })
            .collect();
        Deck { sections }
    }
}
