//! Elapsed-time clock tests.
//!
//! The clock starts on the first accepted pick of a deck, ticks once per
//! interval while running, and stops for good when the board is cleared.

use std::time::Duration;

use rand::rngs::mock::StepRng;

use memory_match::cards::CardId;
use memory_match::game::{GameEvent, MemoryGame};
use memory_match::GameConfig;

fn game() -> MemoryGame<StepRng> {
    // All-zero draws rotate the deck one place: card n pairs with card n + 8
    MemoryGame::with_rng(GameConfig::default(), StepRng::new(0, 0)).unwrap()
}

fn secs(v: u64) -> Duration {
    Duration::from_secs(v)
}

/// Idle time before the first pick is not counted.
#[test]
fn test_clock_waits_for_first_pick() {
    let mut game = game();
    game.advance(secs(30));
    assert_eq!(game.elapsed_secs(), 0);
    assert!(!game.is_running());

    game.select_card(CardId::new(4)).unwrap();
    assert!(game.is_running());
    game.advance(secs(2));
    assert_eq!(game.elapsed_secs(), 2);
}

/// Rejected picks do not start the clock.
#[test]
fn test_ignored_pick_does_not_start_clock() {
    let mut game = game();
    game.select_card(CardId::new(0)).unwrap();
    game.select_card(CardId::new(8)).unwrap();
    game.init_game();

    // Fresh deck; nothing picked yet, so the clock stays put
    assert!(!game.is_running());
    assert!(game.select_card(CardId::new(99)).is_err());
    assert!(!game.is_running());
}

/// Coarse and fine stepping give the same count.
#[test]
fn test_tick_granularity() {
    let mut coarse = game();
    let mut fine = game();
    coarse.select_card(CardId::new(0)).unwrap();
    fine.select_card(CardId::new(0)).unwrap();

    coarse.advance(Duration::from_millis(7300));
    for _ in 0..73 {
        fine.advance(Duration::from_millis(100));
    }

    assert_eq!(coarse.elapsed_secs(), 7);
    assert_eq!(fine.elapsed_secs(), 7);
}

/// Mismatch delays and ticks interleave on one timeline.
#[test]
fn test_ticks_during_mismatch() {
    let mut game = game();
    game.select_card(CardId::new(0)).unwrap();
    game.advance(Duration::from_millis(900));
    game.select_card(CardId::new(1)).unwrap();

    // Tick at 1000, hide at 1700
    game.advance(Duration::from_millis(200));
    assert_eq!(game.elapsed_secs(), 1);
    assert!(game.is_input_locked());

    game.advance(Duration::from_millis(600));
    assert!(!game.is_input_locked());
    assert_eq!(game.elapsed_secs(), 1);
}

/// Completion freezes the time.
#[test]
fn test_clock_stops_on_completion() {
    let mut game = game();
    for n in 0..8 {
        game.select_card(CardId::new(n)).unwrap();
        game.advance(Duration::from_millis(500));
        game.select_card(CardId::new(n + 8)).unwrap();
    }

    // 8 × 500ms of play, the first tick lands at 1000ms
    assert_eq!(game.elapsed_secs(), 4);
    assert!(!game.is_running());
    assert_eq!(game.pending_tasks(), 0);

    game.advance(secs(60));
    assert_eq!(game.elapsed_secs(), 4);

    let completed = game
        .events()
        .iter()
        .find(|e| matches!(e, GameEvent::Completed { .. }))
        .cloned();
    assert_eq!(
        completed,
        Some(GameEvent::Completed {
            moves: 8,
            score: 8,
            elapsed_secs: 4
        })
    );
}

/// Picks on a finished board never restart the clock.
#[test]
fn test_clock_stays_stopped_after_completion() {
    let mut game = game();
    for n in 0..8 {
        game.select_card(CardId::new(n)).unwrap();
        game.select_card(CardId::new(n + 8)).unwrap();
    }
    assert!(!game.select_card(CardId::new(3)).unwrap().is_accepted());
    assert!(!game.is_running());
}
