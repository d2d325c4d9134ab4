//! Spoiler - the catalog of logical cards and their printings.
//!
//! The `Spoiler` stores every known card and indexes printings per card.
//! It provides name lookup and candidate extraction; how the data got
//! here (file, network, generated fixture) is outside this crate.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use super::printing::Printing;

/// Catalog of cards and printings.
///
/// ## Example
///
/// ```
/// use printpick::catalog::{BasicLand, Card, CardId, Printing, PrintingId, Spoiler};
///
/// let mut spoiler = Spoiler::new();
/// spoiler.add_card(Card::basic(CardId::new(1), BasicLand::Forest));
/// spoiler.add_printing(
///     Printing::new(PrintingId::new(10), CardId::new(1), "UNH").with_artist("John Avon"),
/// );
///
/// let forest = spoiler.look_up_by_name("Forest").unwrap();
/// assert_eq!(spoiler.printings_of(forest.id).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Spoiler {
    cards: FxHashMap<CardId, Card>,
    by_name: FxHashMap<String, CardId>,
    printings: FxHashMap<CardId, Vec<Arc<Printing>>>,
}

impl Spoiler {
    /// Create a new empty spoiler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID or name already exists.
    pub fn add_card(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.by_name.contains_key(&card.name) {
            panic!("Card named {:?} already registered", card.name);
        }
        self.by_name.insert(card.name.clone(), card.id);
        self.cards.insert(card.id, card);
    }

    /// Register a printing under its owning card.
    ///
    /// Returns the shared handle. Panics if the owning card is unknown -
    /// a printing without its card is bad input data.
    pub fn add_printing(&mut self, printing: Printing) -> Arc<Printing> {
        if !self.cards.contains_key(&printing.card) {
            panic!(
                "Printing {:?} references unregistered card {:?}",
                printing.id, printing.card
            );
        }
        let shared = Arc::new(printing);
        self.printings
            .entry(shared.card)
            .or_default()
            .push(Arc::clone(&shared));
        shared
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Look a card up by its exact name.
    #[must_use]
    pub fn look_up_by_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).and_then(|id| self.cards.get(id))
    }

    /// All printings of a card, in registration order.
    ///
    /// Unknown cards have no printings.
    #[must_use]
    pub fn printings_of(&self, id: CardId) -> &[Arc<Printing>] {
        self.printings.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Iterate over all cards.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Iterate over all basic land cards.
    pub fn basic_lands(&self) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(|c| c.is_basic())
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the spoiler is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The standard extractor: a card's candidate printings are every
    /// printing the spoiler has for it.
    #[must_use]
    pub fn extractor(&self) -> impl Fn(&Card) -> Vec<Arc<Printing>> + '_ {
        move |card| self.printings_of(card.id).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::card::BasicLand;
    use crate::catalog::printing::PrintingId;

    fn printing(id: u32, card: u32, set: &str) -> Printing {
        Printing::new(PrintingId::new(id), CardId::new(card), set)
    }

    #[test]
    fn test_add_and_get() {
        let mut spoiler = Spoiler::new();
        spoiler.add_card(Card::new(CardId::new(1), "Counterspell"));

        assert_eq!(spoiler.len(), 1);
        assert_eq!(spoiler.get(CardId::new(1)).unwrap().name, "Counterspell");
        assert!(spoiler.get(CardId::new(9)).is_none());
    }

    #[test]
    fn test_look_up_by_name() {
        let mut spoiler = Spoiler::new();
        spoiler.add_card(Card::basic(CardId::new(1), BasicLand::Island));

        let island = spoiler.look_up_by_name("Island").unwrap();
        assert_eq!(island.id, CardId::new(1));
        assert!(spoiler.look_up_by_name("Atoll").is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut spoiler = Spoiler::new();
        spoiler.add_card(Card::new(CardId::new(1), "A"));
        spoiler.add_card(Card::new(CardId::new(1), "B"));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut spoiler = Spoiler::new();
        spoiler.add_card(Card::new(CardId::new(1), "Same"));
        spoiler.add_card(Card::new(CardId::new(2), "Same"));
    }

    #[test]
    fn test_printings_of() {
        let mut spoiler = Spoiler::new();
        spoiler.add_card(Card::basic(CardId::new(1), BasicLand::Forest));
        spoiler.add_printing(printing(10, 1, "ZEN"));
        spoiler.add_printing(printing(11, 1, "UNH"));

        let found = spoiler.printings_of(CardId::new(1));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].set_code, "ZEN");

        assert!(spoiler.printings_of(CardId::new(9)).is_empty());
    }

    #[test]
    #[should_panic(expected = "unregistered card")]
    fn test_orphan_printing_panics() {
        let mut spoiler = Spoiler::new();
        spoiler.add_printing(printing(10, 1, "ZEN"));
    }

    #[test]
    fn test_basic_lands_filter() {
        let mut spoiler = Spoiler::new();
        spoiler.add_card(Card::basic(CardId::new(1), BasicLand::Forest));
        spoiler.add_card(Card::new(CardId::new(2), "Llanowar Elves"));
        spoiler.add_card(Card::snow_basic(CardId::new(3), BasicLand::Forest));

        let basics: Vec<_> = spoiler.basic_lands().collect();
        assert_eq!(basics.len(), 2);
    }

    #[test]
    fn test_extractor() {
        let mut spoiler = Spoiler::new();
        spoiler.add_card(Card::basic(CardId::new(1), BasicLand::Swamp));
        spoiler.add_printing(printing(10, 1, "TMP"));

        let extract = spoiler.extractor();
        let swamp = spoiler.look_up_by_name("Swamp").unwrap();
        assert_eq!(extract(swamp).len(), 1);
    }
}
