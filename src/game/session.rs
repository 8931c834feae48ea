//! The game engine: deck, turn loop, clock and completion.
//!
//! ## Turn loop
//!
//! `Idle` → `OneSelected` → `TwoSelected` → `Idle`. The second pick always
//! counts as a move. A match resolves immediately; a mismatch locks input
//! and schedules [`Task::HideMismatch`].
//!
//! ## Time
//!
//! Nothing here blocks. Delays are [`Task`]s on a [`TimerQueue`] and the
//! host moves time forward with [`MemoryGame::advance`].

use std::time::Duration;

use log::{debug, info, warn};
use rand::RngCore;
use rustc_hash::FxHashSet;

use super::choreography::ChoreographyKind;
use super::event::GameEvent;
use super::turn::{IgnoreReason, SelectOutcome, Turn, TurnPhase};
use crate::cards::{CardId, Deck};
use crate::core::{EngineError, GameConfig, GameRng};
use crate::effects::{EffectsTrigger, NoEffects};
use crate::schedule::TimerQueue;

/// Undrained events kept before the oldest half is discarded.
pub const EVENT_LOG_CAPACITY: usize = 4096;

/// Delayed work owned by the engine.
///
/// Each choreography step carries its own card and position, so steps of
/// one sequence can never swap places.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Task {
    /// Turn a mismatched pair face down and end the turn.
    HideMismatch { first: CardId, second: CardId },
    /// One second of play time.
    Tick,
    /// Start a card's flip-back animation.
    AnimateCard {
        kind: ChoreographyKind,
        card: CardId,
        last: bool,
    },
    /// Finish a card's flip-back animation.
    SettleCard {
        kind: ChoreographyKind,
        card: CardId,
        last: bool,
    },
    /// Close a choreography once its last card has settled.
    Finish(ChoreographyKind),
}

/// A single game session.
///
/// Owns every piece of mutable state. The presentation layer reads
/// [`MemoryGame::view`] and forwards input through `select_card`,
/// `request_restart` and `request_shuffle`.
///
/// Events accumulate until [`MemoryGame::drain_events`]. A host that never
/// drains keeps at most [`EVENT_LOG_CAPACITY`] of the most recent ones.
pub struct MemoryGame<R: RngCore = GameRng> {
    pub(super) config: GameConfig,
    pub(super) rng: R,
    pub(super) deck: Deck,
    pub(super) turn: Turn,

    pub(super) moves: u32,
    pub(super) score: u32,
    pub(super) elapsed_secs: u32,
    pub(super) running: bool,

    /// Rejects selections while a comparison or choreography is pending.
    pub(super) input_locked: bool,
    pub(super) choreography: Option<ChoreographyKind>,
    pub(super) animating: FxHashSet<CardId>,

    /// Set once the effects trigger has fired for this deck.
    pub(super) celebrated: bool,
    pub(super) round: u64,

    pub(super) queue: TimerQueue<Task>,
    pub(super) effects: Box<dyn EffectsTrigger>,
    pub(super) events: Vec<GameEvent>,
}

impl MemoryGame<GameRng> {
    /// Create a game seeded from `config.seed` and deal the first deck.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RngCore> MemoryGame<R> {
    /// Create a game drawing every random decision from `rng`.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = rng;
        let deck = Deck::shuffled(&mut rng);

        let mut game = Self {
            config,
            rng,
            deck,
            turn: Turn::new(),
            moves: 0,
            score: 0,
            elapsed_secs: 0,
            running: false,
            input_locked: false,
            choreography: None,
            animating: FxHashSet::default(),
            celebrated: false,
            round: 1,
            queue: TimerQueue::new(),
            effects: Box::new(NoEffects),
            events: Vec::new(),
        };
        game.emit(GameEvent::NewGame { round: game.round });
        info!("dealt deck for round {}", game.round);
        Ok(game)
    }

    /// Install the completion effects trigger.
    #[must_use]
    pub fn with_effects(mut self, effects: impl EffectsTrigger + 'static) -> Self {
        self.effects = Box::new(effects);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// Completed two-card turns.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs found.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Whether the clock is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether new selections are currently rejected.
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked || self.choreography.is_some()
    }

    /// The choreography in progress, if any.
    #[must_use]
    pub fn choreography(&self) -> Option<ChoreographyKind> {
        self.choreography
    }

    /// Whether a card is mid flip-back.
    #[must_use]
    pub fn is_animating(&self, id: CardId) -> bool {
        self.animating.contains(&id)
    }

    /// Cards mid flip-back, in no particular order.
    pub fn animating_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.animating.iter().copied()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deck.all_matched()
    }

    /// Whether the effects trigger has fired for the current deck.
    #[must_use]
    pub fn has_celebrated(&self) -> bool {
        self.celebrated
    }

    /// Number of decks dealt so far, starting at 1.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Engine time since construction.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.now()
    }

    /// Scheduled tasks not yet fired, the clock tick included.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Events since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand over and forget accumulated events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= EVENT_LOG_CAPACITY {
            let dropped = EVENT_LOG_CAPACITY / 2;
            self.events.drain(..dropped);
            warn!("event log full, dropped {} oldest events", dropped);
        }
        self.events.push(event);
    }

    // === Session ===

    /// Deal a fresh deck and zero every counter.
    ///
    /// Drops anything still scheduled for the old deck, stops the clock and
    /// re-arms the completion trigger.
    pub fn init_game(&mut self) {
        self.queue.clear();
        if self.running {
            self.running = false;
            self.emit(GameEvent::ClockStopped);
        }

        self.deck = Deck::shuffled(&mut self.rng);
        self.turn.clear();
        self.moves = 0;
        self.score = 0;
        self.elapsed_secs = 0;
        self.input_locked = false;
        self.choreography = None;
        self.animating.clear();
        self.celebrated = false;
        self.round += 1;

        self.emit(GameEvent::NewGame { round: self.round });
        info!("dealt deck for round {}", self.round);
    }

    // === Turn loop ===

    /// Pick a card.
    ///
    /// Rejected without any state change while input is locked or when the
    /// card is already face up or matched. The first accepted pick of a deck
    /// starts the clock.
    pub fn select_card(&mut self, id: CardId) -> Result<SelectOutcome, EngineError> {
        let (flipped, matched) = match self.deck.get(id) {
            Some(card) => (card.flipped, card.matched),
            None => return Err(EngineError::UnknownCard(id)),
        };

        if self.choreography.is_some() {
            return Ok(SelectOutcome::Ignored(IgnoreReason::Animating));
        }
        if self.input_locked {
            return Ok(SelectOutcome::Ignored(IgnoreReason::ComparisonPending));
        }
        if matched {
            return Ok(SelectOutcome::Ignored(IgnoreReason::AlreadyMatched));
        }
        if flipped {
            return Ok(SelectOutcome::Ignored(IgnoreReason::AlreadyFaceUp));
        }

        self.start_clock();
        self.deck.update(id, |c| c.flipped = true);
        self.emit(GameEvent::CardFlipped(id));
        debug!("flipped {}", id);

        match self.turn.push(id) {
            TurnPhase::TwoSelected => Ok(self.compare()),
            _ => Ok(SelectOutcome::Revealed(id)),
        }
    }

    /// Resolve a full turn. Every comparison is a move.
    fn compare(&mut self) -> SelectOutcome {
        let Some((first, second)) = self.turn.pair() else {
            return SelectOutcome::Ignored(IgnoreReason::ComparisonPending);
        };

        self.moves += 1;
        self.input_locked = true;

        let icon_of = |deck: &Deck, id| deck.get(id).map(|c| c.icon);
        if icon_of(&self.deck, first) == icon_of(&self.deck, second) {
            for id in [first, second] {
                self.deck.update(id, |c| c.matched = true);
            }
            self.score += 1;
            self.end_turn();
            self.emit(GameEvent::Matched { first, second });
            debug!("matched {} and {} (score {})", first, second, self.score);

            self.check_completion();
            SelectOutcome::Matched { first, second }
        } else {
            self.queue.schedule(
                self.config.timings.mismatch_delay(),
                Task::HideMismatch { first, second },
            );
            self.emit(GameEvent::Mismatched { first, second });
            debug!("mismatch {} and {}", first, second);
            SelectOutcome::Mismatched { first, second }
        }
    }

    fn end_turn(&mut self) {
        self.turn.clear();
        self.input_locked = false;
    }

    /// Fire the effects trigger if every card is matched.
    ///
    /// Runs after each deck change and may be called again freely: the
    /// trigger fires at most once per deck. Returns `true` only on the call
    /// that fired it.
    pub fn check_completion(&mut self) -> bool {
        if self.celebrated || !self.deck.all_matched() {
            return false;
        }

        self.celebrated = true;
        self.stop_clock();
        self.effects.celebrate();
        self.emit(GameEvent::Completed {
            moves: self.moves,
            score: self.score,
            elapsed_secs: self.elapsed_secs,
        });
        info!(
            "board cleared in {} moves and {}s",
            self.moves, self.elapsed_secs
        );
        true
    }

    // === Clock ===

    fn start_clock(&mut self) {
        if self.running || self.celebrated {
            return;
        }
        self.running = true;
        self.queue.schedule(self.config.timings.tick_interval(), Task::Tick);
        self.emit(GameEvent::ClockStarted);
    }

    fn stop_clock(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.queue.cancel(|t| *t == Task::Tick);
        self.emit(GameEvent::ClockStopped);
    }

    // === Time ===

    /// Move engine time forward by `elapsed`, firing everything due.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.queue.now().saturating_add(elapsed);
        while let Some(task) = self.queue.pop_due(target) {
            self.run_task(task);
        }
        self.queue.advance_to(target);
    }

    /// Advance until no mismatch reveal or choreography step is pending.
    ///
    /// Clock ticks falling inside that span fire as usual.
    pub fn settle(&mut self) {
        while self.queue.any(|t| *t != Task::Tick) {
            let Some(due) = self.queue.next_due() else {
                break;
            };
            let step = due.saturating_sub(self.queue.now());
            self.advance(step);
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::HideMismatch { first, second } => {
                for id in [first, second] {
                    self.deck.update(id, |c| c.flipped = false);
                }
                self.end_turn();
                self.emit(GameEvent::CardsHidden { first, second });
                debug!("hid {} and {}", first, second);
                self.check_completion();
            }
            Task::Tick => {
                if self.running {
                    self.elapsed_secs += 1;
                    self.emit(GameEvent::Tick {
                        elapsed_secs: self.elapsed_secs,
                    });
                    self.queue.schedule(self.config.timings.tick_interval(), Task::Tick);
                }
            }
            Task::AnimateCard { kind, card, last } => self.animate_card(kind, card, last),
            Task::SettleCard { kind, card, last } => self.settle_card(kind, card, last),
            Task::Finish(kind) => self.finish_choreography(kind),
        }
    }
}

impl<R: RngCore> std::fmt::Debug for MemoryGame<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("round", &self.round)
            .field("moves", &self.moves)
            .field("score", &self.score)
            .field("elapsed_secs", &self.elapsed_secs)
            .field("running", &self.running)
            .field("input_locked", &self.input_locked)
            .field("choreography", &self.choreography)
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}
