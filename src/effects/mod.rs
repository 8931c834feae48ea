//! Completion effects.
//!
//! The engine does not draw anything. When the last pair is matched it calls
//! the host's [`EffectsTrigger`] once, and the host plays whatever celebration
//! it likes (confetti, sound, a banner).
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use memory_match::effects::EffectsTrigger;
//!
//! let fired = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&fired);
//! let mut trigger = move || counter.set(counter.get() + 1);
//!
//! trigger.celebrate();
//! assert_eq!(fired.get(), 1);
//! ```

mod trigger;

pub use trigger::{CelebrationCounter, EffectsTrigger, NoEffects};
