//! Game configuration types.
//!
//! - `Timings`: every fixed delay the engine schedules
//! - `GameConfig`: seed plus timings
//!
//! Deck size and the icon set are not configurable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Delays used by the turn loop, the clock and both choreographies.
///
/// All values are in milliseconds of engine time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// How long a mismatched pair stays face up.
    pub mismatch_delay_ms: u64,

    /// Period of the elapsed-time clock.
    pub tick_interval_ms: u64,

    /// Gap between consecutive card starts in the restart unwind.
    pub restart_stagger_ms: u64,

    /// Gap between consecutive card starts in the shuffle settle.
    pub shuffle_stagger_ms: u64,

    /// Length of one card's flip-back animation.
    pub flip_duration_ms: u64,

    /// Pause after the last card of a choreography before the board changes.
    pub settle_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: 800,
            tick_interval_ms: 1000,
            restart_stagger_ms: 80,
            shuffle_stagger_ms: 60,
            flip_duration_ms: 200,
            settle_delay_ms: 200,
        }
    }
}

impl Timings {
    /// Zero delays everywhere except the clock, which keeps one second.
    ///
    /// Handy for hosts that skip animations entirely.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            mismatch_delay_ms: 0,
            tick_interval_ms: 1000,
            restart_stagger_ms: 0,
            shuffle_stagger_ms: 0,
            flip_duration_ms: 0,
            settle_delay_ms: 0,
        }
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms)
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Start offset of the `index`-th card in the restart unwind.
    ///
    /// Saturates at `Duration::MAX` for absurd staggers.
    #[must_use]
    pub fn restart_offset(&self, index: usize) -> Duration {
        stagger(self.restart_stagger_ms, index)
    }

    /// Start offset of the `index`-th card in the shuffle settle.
    #[must_use]
    pub fn shuffle_offset(&self, index: usize) -> Duration {
        stagger(self.shuffle_stagger_ms, index)
    }

    /// Check the timings can drive the engine.
    ///
    /// A zero tick interval would make the clock fire forever within one
    /// `advance` call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

fn stagger(step_ms: u64, index: usize) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    Duration::from_millis(step_ms).saturating_mul(index)
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the default RNG.
    /// Same seed produces the same sequence of decks and shuffles.
    pub seed: u64,

    /// Scheduled delays.
    pub timings: Timings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            timings: Timings::default(),
        }
    }
}

impl GameConfig {
    /// Create a config with default timings.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace all timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the mismatch reveal delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, millis: u64) -> Self {
        self.timings.mismatch_delay_ms = millis;
        self
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timings.validate()
    }
}
