//! Card identity and per-card flags.
//!
//! ## Flags
//!
//! - `flipped`: face currently shown because the player picked it
//! - `matched`: permanently resolved
//!
//! A matched card always renders face up, whatever `flipped` says.

use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// Unique identifier of a card within one deck.
///
/// Ids are handed out by position when a deck is built and survive shuffles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub icon: Icon,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, icon: Icon) -> Self {
        Self {
            id,
            icon,
            flipped: false,
            matched: false,
        }
    }

    /// Whether the presentation should show the icon.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }

    /// Face up because of the current turn, not because it was matched.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.flipped && !self.matched
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.id.0, self.icon)
    }
}
