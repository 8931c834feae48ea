//! # memory-match
//!
//! Turn engine for a memory-matching card game: sixteen face-down cards,
//! flipped two at a time, pairs stay revealed.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, no real timers. The host reads a
//!    `BoardView`, forwards clicks, and advances engine time.
//!
//! 2. **Deterministic**: All randomness flows through one injected `RngCore`.
//!    Same seed, same inputs, same game.
//!
//! 3. **Silent rejection**: Clicks on locked or revealed cards change
//!    nothing and say why.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: icons, cards, the deck
//! - `schedule`: virtual-time task queue
//! - `effects`: completion hook
//! - `game`: the engine, choreographies, events, snapshots

pub mod cards;
pub mod core;
pub mod effects;
pub mod game;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{ConfigError, EngineError, GameConfig, GameRng, Timings};

pub use crate::cards::{Card, CardId, Deck, Icon, DECK_SIZE};

pub use crate::effects::{CelebrationCounter, EffectsTrigger, NoEffects};

pub use crate::game::{
    BoardView, CardFace, CardView, ChoreographyKind, ChoreographyOutcome, GameEvent,
    IgnoreReason, MemoryGame, SelectOutcome, Turn, TurnPhase,
};

pub use crate::schedule::TimerQueue;
