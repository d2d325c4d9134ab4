//! Property tests for the load-bearing guarantees: determinism and
//! count preservation, across arbitrary small decks and salts.

use std::sync::Arc;

use proptest::prelude::*;

use printpick::{
    Availability, Card, CardId, ChoiceFactory, Deck, DeckEntry, PreferenceSequence, Printing,
    PrintingId, SectionKind, Spoiler, Step,
};

/// Three cards; "AAA" printings for all of them, "BBB" for the first two.
fn fixture() -> Spoiler {
    let mut spoiler = Spoiler::new();
    for card in 1u32..=3 {
        spoiler.add_card(Card::new(CardId::new(card), format!("Card {card}")));
        spoiler.add_printing(Printing::new(
            PrintingId::new(card * 10),
            CardId::new(card),
            "AAA",
        ));
        spoiler.add_printing(Printing::new(
            PrintingId::new(card * 10 + 1),
            CardId::new(card),
            "AAA",
        ));
        if card < 3 {
            spoiler.add_printing(Printing::new(
                PrintingId::new(card * 10 + 2),
                CardId::new(card),
                "BBB",
            ));
        }
    }
    spoiler
}

fn build_deck(spoiler: &Spoiler, main: &[(u32, u32)], side: &[(u32, u32)]) -> Deck {
    let entry = |&(card, count): &(u32, u32)| {
        DeckEntry::new(
            spoiler.printings_of(CardId::new(card))[0].clone(),
            count,
        )
    };
    let mut deck = Deck::new().with_section(SectionKind::Main, main.iter().map(entry));
    if !side.is_empty() {
        deck = deck.with_section(SectionKind::Sideboard, side.iter().map(entry));
    }
    deck
}

fn build_sequence(spoiler: &Spoiler, salt: u64) -> PreferenceSequence<Arc<Printing>> {
    let versions_in = |set: &str| -> Vec<Arc<Printing>> {
        spoiler
            .cards()
            .flat_map(|card| spoiler.printings_of(card.id).to_vec())
            .filter(|p| p.set_code == set)
            .collect()
    };

    PreferenceSequence::new(ChoiceFactory::with_salt(salt), Availability::unlimited())
        .with_step(Step::from_versions(versions_in("BBB")))
        .with_step(Step::from_versions(versions_in("AAA")))
        .with_mix_all(true)
}

fn entries_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    proptest::collection::vec((1u32..=3, 1u32..=4), 1..6)
}

proptest! {
    #[test]
    fn prop_per_section_counts_preserved(
        main in entries_strategy(),
        side in proptest::collection::vec((1u32..=3, 1u32..=4), 0..3),
        salt in any::<u64>(),
    ) {
        let spoiler = fixture();
        let deck = build_deck(&spoiler, &main, &side);

        let out = build_sequence(&spoiler, salt).apply(&deck);

        prop_assert_eq!(out.size(), deck.size());
        for (before, after) in deck.sections().zip(out.sections()) {
            prop_assert_eq!(before.kind, after.kind);
            prop_assert_eq!(before.size(), after.size());
        }
    }

    #[test]
    fn prop_apply_is_deterministic(
        main in entries_strategy(),
        salt in any::<u64>(),
    ) {
        let spoiler = fixture();
        let deck = build_deck(&spoiler, &main, &[]);

        let first = build_sequence(&spoiler, salt).apply(&deck);
        let second = build_sequence(&spoiler, salt).apply(&deck);

        for (a, b) in first.sections().zip(second.sections()) {
            for (x, y) in a.entries.iter().zip(b.entries.iter()) {
                prop_assert_eq!(x.element.printing().id, y.element.printing().id);
                prop_assert_eq!(x.count, y.count);
            }
        }
    }

    #[test]
    fn prop_assignment_never_crosses_cards(
        main in entries_strategy(),
        salt in any::<u64>(),
    ) {
        let spoiler = fixture();
        let deck = build_deck(&spoiler, &main, &[]);

        if let Some(assignment) = build_sequence(&spoiler, salt).resolve(&deck) {
            for (card, printing) in &assignment {
                prop_assert_eq!(*card, printing.card);
            }
        }
    }
}
