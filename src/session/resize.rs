use crate::foundation::config::OffsetBounds;
use crate::foundation::core::{Duration, PercentOffset};
use crate::layout::scatter::ScatterPosition;

/// Trailing-edge debounce for resize notifications.
///
/// Every notification pushes the deadline to `event time + window`; the relayout runs once the
/// clock passes the deadline with no newer notification.
#[derive(Clone, Debug)]
pub struct ResizeCoordinator {
    window: Duration,
    deadline: Option<Duration>,
    seen_seq: u64,
    relayouts: u64,
}

impl ResizeCoordinator {
    /// Create a coordinator with the given debounce window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            seen_seq: 0,
            relayouts: 0,
        }
    }

    /// Record notification `seq` posted at `at`. Already-seen sequence numbers are ignored.
    pub fn notify(&mut self, seq: u64, at: Duration) {
        if seq <= self.seen_seq {
            return;
        }
        self.seen_seq = seq;
        self.deadline = Some(at + self.window);
    }

    /// Return `true` exactly once when the pending deadline has passed at `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                self.relayouts += 1;
                true
            }
            _ => false,
        }
    }

    /// Forget any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Number of relayouts released so far.
    pub fn relayout_count(&self) -> u64 {
        self.relayouts
    }
}

/// Stored positions pulled into `bounds`, in item order.
pub fn bounded_offsets(positions: &[ScatterPosition], bounds: &OffsetBounds) -> Vec<PercentOffset> {
    positions.iter().map(|p| p.bounded(bounds)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/session/resize.rs"]
mod tests;
