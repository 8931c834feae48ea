//! The completion hook and its stock implementations.

use std::cell::Cell;
use std::rc::Rc;

/// Called with no arguments exactly once per completed game.
///
/// Implementations should return promptly; a long-running effect belongs on
/// the host's own frame loop.
pub trait EffectsTrigger {
    fn celebrate(&mut self);
}

impl<F: FnMut()> EffectsTrigger for F {
    fn celebrate(&mut self) {
        self()
    }
}

/// Trigger that does nothing. Default for headless engines.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffects;

impl EffectsTrigger for NoEffects {
    fn celebrate(&mut self) {}
}

/// Trigger that counts celebrations through a shared handle.
///
/// Clone it before handing it to the engine and read the count from the
/// clone you kept.
#[derive(Clone, Debug, Default)]
pub struct CelebrationCounter {
    count: Rc<Cell<u32>>,
}

impl CelebrationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `celebrate` has run.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count.get()
    }
}

impl EffectsTrigger for CelebrationCounter {
    fn celebrate(&mut self) {
        self.count.set(self.count.get() + 1);
    }
}
