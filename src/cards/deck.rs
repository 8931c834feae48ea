//! The ordered deck of cards for one game.
//!
//! Backed by `im::Vector` so the presentation layer can take a snapshot
//! every frame for O(1).
//!
//! ## Invariant
//!
//! The deck is always a permutation of two copies of every [`Icon`]. Only
//! positions and per-card flags change after construction.

use im::Vector;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::icon::Icon;

/// Copies of each icon in a deck.
pub const COPIES_PER_ICON: usize = 2;

/// Number of cards in every deck.
pub const DECK_SIZE: usize = Icon::ALL.len() * COPIES_PER_ICON;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build a fresh, face-down deck in random order.
    ///
    /// Cards are numbered by their position after the shuffle.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut icons: Vec<Icon> = Icon::ALL
            .iter()
            .copied()
            .chain(Icon::ALL.iter().copied())
            .collect();
        icons.shuffle(rng);

        let cards = icons
            .into_iter()
            .enumerate()
            .map(|(idx, icon)| Card::new(CardId::new(idx as u32), icon))
            .collect();

        let deck = Self { cards };
        deck.debug_assert_pairs();
        deck
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Ids in board order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Card at a board position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Mutate one card in place. Returns `false` if the id is unknown.
    pub fn update(&mut self, id: CardId, f: impl FnOnce(&mut Card)) -> bool {
        match self.position(id).and_then(|idx| self.cards.get_mut(idx)) {
            Some(card) => {
                f(card);
                true
            }
            None => false,
        }
    }

    /// Every card matched. An empty deck is never complete.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Ids of matched cards in board order.
    #[must_use]
    pub fn matched_ids(&self) -> Vec<CardId> {
        self.cards.iter().filter(|c| c.matched).map(|c| c.id).collect()
    }

    /// Ids of face-up, unmatched cards in board order.
    #[must_use]
    pub fn pending_ids(&self) -> Vec<CardId> {
        self.cards.iter().filter(|c| c.is_pending()).map(|c| c.id).collect()
    }

    /// Reorder the cards. Identity and flags travel with each card.
    pub fn permute<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        cards.shuffle(rng);
        self.cards = cards.into_iter().collect();
        self.debug_assert_pairs();
    }

    /// Show matched cards, hide everything else.
    pub fn normalize_flipped(&mut self) {
        for card in self.cards.iter_mut() {
            card.flipped = card.matched;
        }
    }

    /// How many times each icon appears.
    #[must_use]
    pub fn icon_counts(&self) -> FxHashMap<Icon, usize> {
        let mut counts = FxHashMap::default();
        for card in self.cards.iter() {
            *counts.entry(card.icon).or_insert(0) += 1;
        }
        counts
    }

    fn has_valid_pairs(&self) -> bool {
        let counts = self.icon_counts();
        self.cards.len() == DECK_SIZE
            && Icon::ALL
                .iter()
                .all(|icon| counts.get(icon).copied() == Some(COPIES_PER_ICON))
    }

    fn debug_assert_pairs(&self) {
        debug_assert!(self.has_valid_pairs(), "deck must hold two of every icon");
    }
}
