use crate::animation::ease::Ease;
use crate::foundation::config::TimingTuning;
use crate::foundation::core::Duration;

/// Identity of one sweep run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct SweepId(pub u64);

/// Outcome of advancing a sweep by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepStep {
    /// Still inside the internal delay.
    Waiting,
    /// A new displayed value; `finished` is set on the frame that reaches the target.
    Frame {
        /// Displayed percentage (eased share of the target).
        percentage: f64,
        /// Progress reached 1 on this frame.
        finished: bool,
    },
    /// Already finished on an earlier tick.
    Idle,
}

/// Percentage sweep from 0 to a target, advanced once per external tick.
///
/// The task carries its own start time and duration, so a late tick simply observes more
/// elapsed time; it never replays skipped frames.
#[derive(Clone, Debug)]
pub struct SweepTask {
    id: SweepId,
    start: Duration,
    delay: Duration,
    duration: Duration,
    target: f64,
    ease: Ease,
    finished: bool,
}

impl SweepTask {
    /// Sweep toward `target` starting at `start`, using the tuning's delay, length and easing.
    pub fn new(id: SweepId, start: Duration, target: f64, timing: &TimingTuning) -> Self {
        Self {
            id,
            start,
            delay: timing.sweep_delay(),
            duration: timing.sweep_duration(),
            target,
            ease: timing.sweep_ease,
            finished: false,
        }
    }

    /// Sweep identity.
    pub fn id(&self) -> SweepId {
        self.id
    }

    /// Target percentage (as requested, before clamping).
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Return `true` once the final frame has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Time at which the final frame is due.
    pub fn end_time(&self) -> Duration {
        self.start.saturating_add(self.delay).saturating_add(self.duration)
    }

    /// Normalized progress at `now`, or `None` while still delayed.
    pub fn progress_at(&self, now: Duration) -> Option<f64> {
        let elapsed = now.checked_sub(self.start.saturating_add(self.delay))?;
        if self.duration.is_zero() {
            return Some(1.0);
        }
        Some((elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0))
    }

    /// Advance to `now`.
    pub fn advance(&mut self, now: Duration) -> SweepStep {
        if self.finished {
            return SweepStep::Idle;
        }
        let Some(progress) = self.progress_at(now) else {
            return SweepStep::Waiting;
        };
        let percentage = self.ease.apply(progress) * self.target;
        let finished = progress >= 1.0;
        self.finished = finished;
        SweepStep::Frame {
            percentage,
            finished,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sweep.rs"]
mod tests;
