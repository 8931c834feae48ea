//! Restart and shuffle choreographies.
//!
//! Both run the same staged sequence under the input lock:
//!
//! 1. card `i` starts animating at `i × stagger`
//! 2. `flip_duration` later it turns face down and stops animating
//! 3. `settle_delay` after the last card, the board changes
//!
//! | | Restart | Shuffle |
//! |---|---|---|
//! | Cards | every matched card, random order | face-up unmatched cards, board order |
//! | Stagger | `restart_stagger_ms` | `shuffle_stagger_ms` |
//! | Per card | clears `flipped` and `matched` | clears `flipped` |
//! | Then | deal a new deck | permute the deck, `flipped = matched` |
//!
//! With nothing to animate, both act immediately.

use log::debug;
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::session::{MemoryGame, Task};
use crate::cards::CardId;

/// Which choreography is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoreographyKind {
    /// Unwinding a finished board before dealing a new one.
    Restart,
    /// Turning face-up cards down before reshuffling.
    Shuffle,
}

/// Result of a restart or shuffle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoreographyOutcome {
    /// Applied at once, no animation.
    Immediate,
    /// A choreography was scheduled; input is locked until it finishes.
    Started,
    /// Rejected because input is locked.
    Ignored,
}

impl<R: RngCore> MemoryGame<R> {
    /// Restart the game.
    ///
    /// An unfinished board is replaced at once. A finished board unwinds
    /// card by card in random order first. Ignored while a choreography is
    /// running.
    pub fn request_restart(&mut self) -> ChoreographyOutcome {
        if self.choreography.is_some() {
            return ChoreographyOutcome::Ignored;
        }

        if !self.deck.all_matched() {
            self.init_game();
            return ChoreographyOutcome::Immediate;
        }

        let mut order = self.deck.matched_ids();
        order.shuffle(&mut self.rng);
        self.begin(ChoreographyKind::Restart, &order);
        ChoreographyOutcome::Started
    }

    /// Reshuffle card positions, keeping matches.
    ///
    /// Face-up unmatched cards are turned down one by one before the
    /// permutation. Ignored while input is locked.
    pub fn request_shuffle(&mut self) -> ChoreographyOutcome {
        if self.is_input_locked() {
            return ChoreographyOutcome::Ignored;
        }

        let pending = self.deck.pending_ids();
        self.turn.clear();

        if pending.is_empty() {
            self.apply_shuffle();
            return ChoreographyOutcome::Immediate;
        }

        self.begin(ChoreographyKind::Shuffle, &pending);
        ChoreographyOutcome::Started
    }

    /// Lock input and schedule one animation start per card.
    fn begin(&mut self, kind: ChoreographyKind, order: &[CardId]) {
        debug_assert!(!order.is_empty());

        self.choreography = Some(kind);
        self.input_locked = true;
        self.animating.clear();

        let timings = self.config.timings;
        for (index, &card) in order.iter().enumerate() {
            let offset = match kind {
                ChoreographyKind::Restart => timings.restart_offset(index),
                ChoreographyKind::Shuffle => timings.shuffle_offset(index),
            };
            let last = index + 1 == order.len();
            self.queue.schedule(offset, Task::AnimateCard { kind, card, last });
        }

        self.emit(GameEvent::ChoreographyStarted(kind));
        debug!("{:?} choreography over {} cards", kind, order.len());
    }

    pub(super) fn animate_card(&mut self, kind: ChoreographyKind, card: CardId, last: bool) {
        self.animating.insert(card);
        self.emit(GameEvent::CardAnimating { kind, card });
        self.queue.schedule(
            self.config.timings.flip_duration(),
            Task::SettleCard { kind, card, last },
        );
    }

    pub(super) fn settle_card(&mut self, kind: ChoreographyKind, card: CardId, last: bool) {
        self.deck.update(card, |c| {
            c.flipped = false;
            if kind == ChoreographyKind::Restart {
                c.matched = false;
            }
        });
        self.animating.remove(&card);
        self.emit(GameEvent::CardSettled { kind, card });

        if last {
            self.queue
                .schedule(self.config.timings.settle_delay(), Task::Finish(kind));
        }
        self.check_completion();
    }

    pub(super) fn finish_choreography(&mut self, kind: ChoreographyKind) {
        match kind {
            ChoreographyKind::Restart => self.init_game(),
            ChoreographyKind::Shuffle => {
                self.apply_shuffle();
                self.choreography = None;
                self.input_locked = false;
                self.animating.clear();
            }
        }
        debug!("{:?} choreography finished", kind);
    }

    /// Permute the deck and show exactly the matched cards.
    fn apply_shuffle(&mut self) {
        self.deck.permute(&mut self.rng);
        self.deck.normalize_flipped();
        self.emit(GameEvent::Shuffled);
        debug!("shuffled, {} cards matched", self.deck.matched_count());
        self.check_completion();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::core::GameConfig;

    // All-zero draws rotate any shuffled list one place to the left.
    fn game() -> MemoryGame<StepRng> {
        MemoryGame::with_rng(GameConfig::default(), StepRng::new(0, 0)).unwrap()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Step time in 10ms increments, stamping each event with the engine time.
    fn timeline(game: &mut MemoryGame<StepRng>, span: Duration) -> Vec<(Duration, GameEvent)> {
        let mut stamped = Vec::new();
        game.advance(Duration::ZERO);
        let end = game.now() + span;
        loop {
            let now = game.now();
            stamped.extend(game.drain_events().into_iter().map(|e| (now, e)));
            if now >= end {
                break;
            }
            game.advance(ms(10));
        }
        stamped
    }

    fn clear_board(game: &mut MemoryGame<StepRng>) {
        for n in 0..8 {
            game.select_card(CardId::new(n)).unwrap();
            game.select_card(CardId::new(n + 8)).unwrap();
        }
        assert!(game.is_complete());
    }

    #[test]
    fn test_restart_unfinished_is_immediate() {
        let mut game = game();
        game.select_card(CardId::new(0)).unwrap();

        assert_eq!(game.request_restart(), ChoreographyOutcome::Immediate);
        assert_eq!(game.round(), 2);
        assert!(!game.is_input_locked());
    }

    #[test]
    fn test_restart_finished_unwinds() {
        let mut game = game();
        clear_board(&mut game);

        assert_eq!(game.request_restart(), ChoreographyOutcome::Started);
        assert_eq!(game.choreography(), Some(ChoreographyKind::Restart));
        assert_eq!(game.request_restart(), ChoreographyOutcome::Ignored);

        // Rotated order: card 1 starts at 0ms, card 2 at 80ms, card 0 last
        game.advance(Duration::ZERO);
        assert!(game.is_animating(CardId::new(1)));
        assert!(!game.is_animating(CardId::new(2)));
        assert!(!game.is_animating(CardId::new(0)));

        game.advance(ms(200));
        assert!(!game.is_animating(CardId::new(1)));
        assert!(!game.deck().get(CardId::new(1)).unwrap().matched);
        assert!(game.deck().get(CardId::new(2)).unwrap().matched);

        game.settle();
        assert_eq!(game.round(), 2);
        assert_eq!(game.choreography(), None);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_shuffle_without_face_up_is_immediate() {
        let mut game = game();
        assert_eq!(game.request_shuffle(), ChoreographyOutcome::Immediate);
        assert!(!game.is_input_locked());
        assert_eq!(game.events().last(), Some(&GameEvent::Shuffled));
    }

    #[test]
    fn test_shuffle_settles_face_up_card() {
        let mut game = game();
        game.select_card(CardId::new(3)).unwrap();

        assert_eq!(game.request_shuffle(), ChoreographyOutcome::Started);
        assert!(game.turn().is_empty());
        assert!(game.is_input_locked());

        game.settle();
        assert!(!game.is_input_locked());
        assert!(!game.deck().get(CardId::new(3)).unwrap().flipped);
    }

    #[test]
    fn test_shuffle_ignored_during_comparison() {
        let mut game = game();
        game.select_card(CardId::new(0)).unwrap();
        game.select_card(CardId::new(1)).unwrap();
        assert_eq!(game.request_shuffle(), ChoreographyOutcome::Ignored);
        assert_eq!(game.turn().pair(), Some((CardId::new(0), CardId::new(1))));
    }

    #[test]
    fn test_shuffle_staggers_every_pending_card() {
        let mut game = game();
        for n in [3, 4, 5] {
            game.deck.update(CardId::new(n), |c| c.flipped = true);
        }
        game.drain_events();

        assert_eq!(game.request_shuffle(), ChoreographyOutcome::Started);
        let stamped = timeline(&mut game, ms(600));
        let at = |event: &GameEvent| {
            stamped
                .iter()
                .find(|(_, e)| e == event)
                .map(|(t, _)| t.as_millis())
        };

        let kind = ChoreographyKind::Shuffle;
        for (k, n) in [3u32, 4, 5].into_iter().enumerate() {
            let card = CardId::new(n);
            let start = 60 * k as u128;
            assert_eq!(at(&GameEvent::CardAnimating { kind, card }), Some(start));
            assert_eq!(at(&GameEvent::CardSettled { kind, card }), Some(start + 200));
        }
        // Last card settles at 320ms, the deck reshuffles 200ms later
        assert_eq!(at(&GameEvent::Shuffled), Some(520));
        assert!(!game.is_input_locked());
        assert!(game.deck().pending_ids().is_empty());
    }

    #[test]
    fn test_huge_stagger_does_not_overflow() {
        let timings: crate::core::Timings =
            serde_json::from_str(r#"{"restart_stagger_ms": 9223372036854775807}"#).unwrap();
        let config = GameConfig::default().with_timings(timings);
        config.validate().unwrap();
        let mut game = MemoryGame::with_rng(config, StepRng::new(0, 0)).unwrap();
        clear_board(&mut game);

        assert_eq!(game.request_restart(), ChoreographyOutcome::Started);
        game.advance(ms(1000));
        assert!(!game.deck().get(CardId::new(1)).unwrap().matched);
        assert!(game.deck().get(CardId::new(2)).unwrap().matched);
        assert!(game.is_input_locked());
    }
}
