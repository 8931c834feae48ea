//! Events emitted by the engine for the presentation layer.
//!
//! The board snapshot says *what* the board looks like; events say *what
//! just happened*, so a renderer can start the matching animation.

use serde::{Deserialize, Serialize};

use super::choreography::ChoreographyKind;
use crate::cards::CardId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was dealt.
    NewGame { round: u64 },

    /// A card was turned face up by the player.
    CardFlipped(CardId),

    /// Two picks matched.
    Matched { first: CardId, second: CardId },

    /// Two picks differ and will be hidden after the mismatch delay.
    Mismatched { first: CardId, second: CardId },

    /// A mismatched pair was turned face down again.
    CardsHidden { first: CardId, second: CardId },

    ClockStarted,
    ClockStopped,

    /// The clock advanced by one second.
    Tick { elapsed_secs: u32 },

    /// Every card is matched. Fires once per game, together with the
    /// effects trigger.
    Completed {
        moves: u32,
        score: u32,
        elapsed_secs: u32,
    },

    ChoreographyStarted(ChoreographyKind),

    /// A card started its flip-back animation.
    CardAnimating { kind: ChoreographyKind, card: CardId },

    /// A card finished its flip-back animation.
    CardSettled { kind: ChoreographyKind, card: CardId },

    /// The deck was reordered.
    Shuffled,
}
