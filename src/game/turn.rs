//! The two-card selection of a single turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card picked yet.
    Idle,
    /// One card face up, waiting for its partner.
    OneSelected,
    /// Two cards picked; the comparison is resolving.
    TwoSelected,
}

/// Cards picked so far this turn, in pick order.
///
/// Never holds more than two ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    selected: SmallVec<[CardId; 2]>,
}

impl Turn {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.selected.len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneSelected,
            _ => TurnPhase::TwoSelected,
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<CardId> {
        self.selected.first().copied()
    }

    #[must_use]
    pub fn second(&self) -> Option<CardId> {
        self.selected.get(1).copied()
    }

    /// Both picks, once the turn is full.
    #[must_use]
    pub fn pair(&self) -> Option<(CardId, CardId)> {
        match self.selected.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.selected.contains(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Record a pick and return the new phase.
    ///
    /// The engine only calls this with fewer than two picks recorded.
    pub fn push(&mut self, id: CardId) -> TurnPhase {
        debug_assert!(self.selected.len() < 2, "at most two cards per turn");
        debug_assert!(!self.contains(id), "a card cannot be picked twice");
        self.selected.push(id);
        self.phase()
    }

    /// Forget both picks.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A restart or shuffle choreography is running.
    Animating,
    /// Two cards are face up waiting for the mismatch delay.
    ComparisonPending,
    /// The card is already face up this turn.
    AlreadyFaceUp,
    /// The card was matched earlier.
    AlreadyMatched,
}

/// Result of `MemoryGame::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Input was rejected; nothing changed.
    Ignored(IgnoreReason),
    /// First card of the turn is now face up.
    Revealed(CardId),
    /// Second card matched the first. Both stay face up for good.
    Matched { first: CardId, second: CardId },
    /// Second card differs. Both flip back after the mismatch delay.
    Mismatched { first: CardId, second: CardId },
}

impl SelectOutcome {
    /// Whether the selection was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}
