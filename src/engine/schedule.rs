//! Deferred continuations on a virtual clock.
//!
//! Every delay in a turn (resolution pause, mismatch hide, computer think
//! time) is a [`Continuation`] queued with the session generation that was
//! current when it was scheduled. The session compares that token on fire;
//! a continuation from an earlier generation does nothing.
//!
//! Time only moves when the owner calls [`Scheduler::pop_due`] with a later
//! deadline, so playback is fully deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::core::Position;

/// Session generation. Bumped by every reset and abandon.
pub type Generation = u64;

/// A resumable step of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Compare the two face-up cards.
    Resolve,

    /// Turn a mismatched pair back over and pass the turn.
    HideMismatch { first: Position, second: Position },

    /// Computer turns its first card.
    ComputerFirstPick,

    /// Computer turns a second card, anchored on the first.
    ComputerSecondPick { anchor: Position },
}

/// A continuation with its due time and generation token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub due_ms: u64,
    pub generation: Generation,
    pub step: Continuation,
    /// Scheduling order, breaks ties between equal due times.
    seq: u64,
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending continuations plus the virtual clock.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<ScheduledTask>>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue `step` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, generation: Generation, step: Continuation) {
        let task = ScheduledTask {
            due_ms: self.now_ms.saturating_add(delay_ms),
            generation,
            step,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(task));
    }

    /// Pop the earliest task due at or before `deadline_ms`, moving the clock
    /// to its due time. Returns `None` when nothing is due by then.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<ScheduledTask> {
        let due = self.queue.peek()?.0.due_ms;
        if due > deadline_ms {
            return None;
        }
        let Reverse(task) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(task.due_ms);
        Some(task)
    }

    /// Move the clock forward to `time_ms` without firing anything.
    pub fn advance_to(&mut self, time_ms: u64) {
        self.now_ms = self.now_ms.max(time_ms);
    }

    /// Number of queued tasks, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
