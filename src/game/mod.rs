//! The memory-matching game engine.
//!
//! - `session`: `MemoryGame`, the turn loop, clock and completion
//! - `choreography`: staged restart and shuffle
//! - `turn`: the two-card selection
//! - `event`: what just happened, for renderers
//! - `view`: what the board looks like, for renderers
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use rand::rngs::mock::StepRng;
//! use memory_match::cards::CardId;
//! use memory_match::core::GameConfig;
//! use memory_match::game::{MemoryGame, SelectOutcome};
//!
//! // All-zero draws rotate the deck one place: card n pairs with card n + 8
//! let mut game = MemoryGame::with_rng(GameConfig::default(), StepRng::new(0, 0)).unwrap();
//!
//! game.select_card(CardId::new(0)).unwrap();
//! let outcome = game.select_card(CardId::new(8)).unwrap();
//! assert!(matches!(outcome, SelectOutcome::Matched { .. }));
//! assert_eq!(game.score(), 1);
//!
//! game.select_card(CardId::new(1)).unwrap();
//! game.select_card(CardId::new(2)).unwrap();
//! game.advance(Duration::from_millis(800));
//! assert!(!game.deck().get(CardId::new(1)).unwrap().flipped);
//! ```

mod choreography;
mod event;
mod session;
mod turn;
mod view;

pub use choreography::{ChoreographyKind, ChoreographyOutcome};
pub use event::GameEvent;
pub use session::{MemoryGame, EVENT_LOG_CAPACITY};
pub use turn::{IgnoreReason, SelectOutcome, Turn, TurnPhase};
pub use view::{BoardView, CardFace, CardView};
