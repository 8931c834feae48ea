//! The fixed symbol set printed on card faces.

use serde::{Deserialize, Serialize};

/// One of the eight fruit symbols. Every deck holds exactly two of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Icon {
    Apple,
    Banana,
    Grapes,
    Strawberry,
    Peach,
    Pineapple,
    Kiwi,
    Watermelon,
}

impl Icon {
    /// Every icon, in deck-building order.
    pub const ALL: [Icon; 8] = [
        Icon::Apple,
        Icon::Banana,
        Icon::Grapes,
        Icon::Strawberry,
        Icon::Peach,
        Icon::Pineapple,
        Icon::Kiwi,
        Icon::Watermelon,
    ];

    /// Emoji shown on the card face.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Apple => "🍎",
            Icon::Banana => "🍌",
            Icon::Grapes => "🍇",
            Icon::Strawberry => "🍓",
            Icon::Peach => "🍑",
            Icon::Pineapple => "🍍",
            Icon::Kiwi => "🥝",
            Icon::Watermelon => "🍉",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
