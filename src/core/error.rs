//! Engine error types.
//!
//! Ignored input is not an error; see `SelectOutcome` and
//! `ChoreographyOutcome`. These cover configuration mistakes and ids the
//! engine never handed out.

use thiserror::Error;

use crate::cards::CardId;

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Errors returned by `MemoryGame`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no card with id {0} in the current deck")]
    UnknownCard(CardId),
}
