//! Read-only board snapshot for rendering.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::session::MemoryGame;
use crate::cards::{Card, CardId, Icon};

/// What the player sees on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// Face down; render the "?" back.
    Hidden,
    Shown(Icon),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub face: CardFace,
    pub matched: bool,
    /// Mid flip-back animation.
    pub animating: bool,
}

impl CardView {
    fn from_card(card: &Card, animating: bool) -> Self {
        let face = if card.is_face_up() {
            CardFace::Shown(card.icon)
        } else {
            CardFace::Hidden
        };
        Self {
            id: card.id,
            face,
            matched: card.matched,
            animating,
        }
    }
}

/// Everything the presentation layer renders, in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub round: u64,
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub score: u32,
    pub elapsed_secs: u32,
    pub running: bool,
    pub input_locked: bool,
    /// The shuffle control mirrors the input lock.
    pub shuffle_enabled: bool,
    pub complete: bool,
}

impl<R: RngCore> MemoryGame<R> {
    /// Snapshot the board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let cards = self
            .deck()
            .iter()
            .map(|card| CardView::from_card(card, self.is_animating(card.id)))
            .collect();
        let input_locked = self.is_input_locked();

        BoardView {
            round: self.round(),
            cards,
            moves: self.moves(),
            score: self.score(),
            elapsed_secs: self.elapsed_secs(),
            running: self.is_running(),
            input_locked,
            shuffle_enabled: !input_locked,
            complete: self.is_complete(),
        }
    }
}
