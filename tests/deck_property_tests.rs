//! Property tests for deck construction, shuffles and the turn loop.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::mock::StepRng;

use memory_match::cards::{CardId, Deck, Icon, DECK_SIZE};
use memory_match::game::{ChoreographyOutcome, MemoryGame};
use memory_match::{GameConfig, GameRng};

/// Sixteen unique ids, two cards per icon.
fn is_paired_deck(deck: &Deck) -> bool {
    let mut ids: Vec<CardId> = deck.ids().collect();
    ids.sort();
    ids.dedup();
    let counts = deck.icon_counts();
    ids.len() == DECK_SIZE && Icon::ALL.iter().all(|icon| counts.get(icon) == Some(&2))
}

proptest! {
    /// Every deck holds two of each icon, whatever the seed.
    #[test]
    fn prop_deck_is_pairs(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(deck.len() % 2, 0);

        let counts = deck.icon_counts();
        prop_assert_eq!(counts.len(), Icon::ALL.len());
        for icon in Icon::ALL {
            prop_assert_eq!(counts[&icon], 2);
        }
    }

    /// Counter-style mock draws still produce a valid deck.
    #[test]
    fn prop_stepped_deck_is_pairs(start in any::<u64>(), step in 1u64..1_000_000) {
        let deck = Deck::shuffled(&mut StepRng::new(start, step));
        prop_assert!(is_paired_deck(&deck));
    }

    /// Shuffles keep each card's match flag and show only matched cards.
    #[test]
    fn prop_shuffle_preserves_matches(seed in any::<u64>(), pairs in 0usize..8) {
        let mut game = MemoryGame::new(GameConfig::new(seed)).unwrap();

        for _ in 0..pairs {
            let first = game.deck().iter().find(|c| !c.matched).unwrap().clone();
            let second = game
                .deck()
                .iter()
                .find(|c| c.icon == first.icon && c.id != first.id)
                .unwrap()
                .id;
            game.select_card(first.id).unwrap();
            game.select_card(second).unwrap();
        }

        let mut before = game.deck().matched_ids();
        prop_assert_eq!(game.request_shuffle(), ChoreographyOutcome::Immediate);
        let mut after = game.deck().matched_ids();
        before.sort();
        after.sort();

        prop_assert_eq!(before, after);
        prop_assert_eq!(game.deck().matched_count(), pairs * 2);
        for card in game.deck().iter() {
            prop_assert_eq!(card.flipped, card.matched);
        }
    }

    /// Random clicking never breaks the counters or the deck.
    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        clicks in proptest::collection::vec((0u32..16, 0u64..1500), 1..80),
    ) {
        let mut game = MemoryGame::new(GameConfig::new(seed)).unwrap();

        for (card, wait) in clicks {
            let moves_before = game.moves();
            let outcome = game.select_card(CardId::new(card)).unwrap();
            if !outcome.is_accepted() {
                prop_assert_eq!(game.moves(), moves_before);
            }
            game.advance(Duration::from_millis(wait));

            prop_assert!(game.score() <= game.moves());
            prop_assert_eq!(game.deck().matched_count(), game.score() as usize * 2);
            prop_assert!(game.deck().pending_ids().len() <= 2);
            prop_assert!(is_paired_deck(game.deck()));
        }
    }
}
