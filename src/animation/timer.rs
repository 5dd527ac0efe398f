use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::foundation::core::Duration;

/// Handle returned when a timer is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// A one-shot timer that came due.
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<E> {
    /// Handle of the timer.
    pub id: TimerId,
    /// Time the timer was due (not the time it was observed).
    pub due: Duration,
    /// Payload.
    pub event: E,
}

struct Entry<E> {
    due: Duration,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Deterministic one-shot timer queue.
///
/// Ordering rule: earliest due first; timers due at the same instant fire in scheduling order.
pub struct TimerQueue<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire once at `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            due: now.saturating_add(delay),
            seq,
            event,
        }));
        TimerId(seq)
    }

    /// Pop the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<E>> {
        if self.heap.peek()?.0.due > now {
            return None;
        }
        let Reverse(entry) = self.heap.pop()?;
        Some(Fired {
            id: TimerId(entry.seq),
            due: entry.due,
            event: entry.event,
        })
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|e| e.0.due)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Return `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timer.rs"]
mod tests;
