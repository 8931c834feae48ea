//! Core engine types: RNG, configuration, errors.
//!
//! Nothing here knows about cards or turns.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Timings};
pub use error::{ConfigError, EngineError};
pub use rng::GameRng;
