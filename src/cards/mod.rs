//! Cards, icons and the deck.
//!
//! - `Icon`: the fixed eight-symbol set
//! - `Card`: id, icon and the `flipped` / `matched` flags
//! - `Deck`: two copies of every icon in board order

pub mod card;
pub mod deck;
pub mod icon;

pub use card::{Card, CardId};
pub use deck::{Deck, COPIES_PER_ICON, DECK_SIZE};
pub use icon::Icon;
