//! Virtual-time task scheduling.
//!
//! The engine never sleeps or spawns. Delayed work is pushed onto a
//! [`TimerQueue`] and the host drives time forward; due tasks come back out
//! in order.
//!
//! ## Ordering
//!
//! Tasks fire by due time, ties broken by insertion order. A task scheduled
//! while another fires is measured from the firing task's due time, so
//! chained delays add up exactly regardless of how coarsely the host
//! advances.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::schedule::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! queue.schedule(Duration::from_millis(200), "settle");
//! queue.schedule(Duration::from_millis(80), "start");
//!
//! let target = Duration::from_millis(250);
//! assert_eq!(queue.pop_due(target), Some("start"));
//! assert_eq!(queue.pop_due(target), Some("settle"));
//! assert_eq!(queue.pop_due(target), None);
//! ```

mod queue;

pub use queue::TimerQueue;
