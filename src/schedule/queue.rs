//! Fire-once timer queue.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// A task waiting for its due time.
#[derive(Clone, Debug)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

/// Single-threaded queue of delayed tasks on a virtual clock.
///
/// ## Behavior
///
/// - `schedule()`: queue a task `delay` after the current time
/// - `pop_due()`: take the earliest task due at or before a target time,
///   moving the clock to that task's due time
/// - `advance_to()`: move the clock once nothing else is due
/// - `cancel()` / `clear()`: drop pending tasks
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BinaryHeap::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to fire `delay` from now.
    ///
    /// Due times saturate at `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let entry = Entry {
            due: self.now.saturating_add(delay),
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.pending.push(Reverse(entry));
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(e)| e.due)
    }

    /// Take the earliest task due at or before `target`.
    ///
    /// The clock moves to the task's due time, never backwards.
    pub fn pop_due(&mut self, target: Duration) -> Option<T> {
        if self.next_due()? > target {
            return None;
        }
        let Reverse(entry) = self.pending.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.task)
    }

    /// Move the clock to `target` if it is ahead.
    pub fn advance_to(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }

    /// Drop every pending task matching `pred`. Returns how many were dropped.
    pub fn cancel(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|Reverse(e)| !pred(&e.task));
        before - self.pending.len()
    }

    /// Drop every pending task. The clock keeps its value.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Check if any task matches `pred`.
    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.pending.iter().any(|Reverse(e)| pred(&e.task))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
