//! Phase sequencing for one widget.
//!
//! Phases are driven by fixed delays measured from the run start, not by completion signals:
//!
//! - `t0`: items get their final transforms (the per-item delays stagger the visuals)
//! - `t0 + 200ms`: chart reveal; a sweep starts with its own 500ms internal delay
//! - sweep end: sector separation (after `separation_delay`)
//! - `t0 + 4500ms`: completion
//!
//! The sequencer never touches the scene. It emits [`Cue`]s that the widget applies, which
//! keeps every timing decision testable without a visual tree.

use crate::animation::sweep::{SweepId, SweepStep, SweepTask};
use crate::animation::timer::TimerQueue;
use crate::chart::sector::{PieGeometry, SectorPair, SeparationOffsets, clamp_percentage};
use crate::foundation::config::{TimingTuning, Tuning};
use crate::foundation::core::Duration;

/// Widget-level animation progression.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AnimationPhase {
    /// Nothing started yet.
    Idle,
    /// Items are moving to their scatter positions.
    ScatterRevealing,
    /// The chart container is being revealed.
    ChartRevealing,
    /// The displayed percentage is counting up.
    PercentageSweeping,
    /// The two sectors have been pulled apart.
    SeparatingSectors,
    /// The completion timer fired.
    Complete,
}

/// Identity of one `start` invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct RunId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerEvent {
    AutoStart,
    RevealChart { run: RunId },
    Separate { sweep: SweepId, target: f64 },
    Complete { run: RunId },
}

/// Instruction for the visual layer, stamped with the logical time it takes effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Cue {
    /// Apply final transforms to every item.
    RevealItems {
        /// Run that issued the cue.
        run: RunId,
        /// Logical time of the reveal.
        at: Duration,
    },
    /// Reveal the chart container.
    RevealChart {
        /// Run that issued the cue.
        run: RunId,
        /// Logical time of the reveal.
        at: Duration,
    },
    /// New sector paths for one sweep frame.
    Sectors {
        /// Sweep that produced the frame.
        sweep: SweepId,
        /// Paths and clamped percentage.
        pair: SectorPair,
    },
    /// Pull the sectors apart.
    Separate {
        /// Sweep whose completion triggered the separation.
        sweep: SweepId,
        /// Per-sector translation.
        offsets: SeparationOffsets,
        /// Logical time the separation starts.
        at: Duration,
    },
    /// The completion timer fired.
    Complete {
        /// Run that issued the cue.
        run: RunId,
        /// Logical completion time.
        at: Duration,
    },
}

/// Timer-and-frame driven state machine behind one widget.
pub struct Sequencer {
    timing: TimingTuning,
    geometry: PieGeometry,
    separation_distance: f64,
    timers: TimerQueue<TimerEvent>,
    sweeps: Vec<SweepTask>,
    phase: AnimationPhase,
    current_run: Option<RunId>,
    run_sweep: Option<SweepId>,
    next_run: u64,
    next_sweep: u64,
    target: f64,
    displayed: f64,
    now: Duration,
}

impl Sequencer {
    /// Create an idle sequencer targeting `target` percent, with the clock at `now`.
    pub fn new(tuning: &Tuning, target: f64, now: Duration) -> Self {
        Self {
            timing: tuning.timing.clone(),
            geometry: PieGeometry::from_tuning(&tuning.pie),
            separation_distance: tuning.pie.separation_distance,
            timers: TimerQueue::new(),
            sweeps: Vec::new(),
            phase: AnimationPhase::Idle,
            current_run: None,
            run_sweep: None,
            next_run: 0,
            next_sweep: 0,
            target,
            displayed: 0.0,
            now,
        }
    }

    /// Current phase of the latest run.
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Most recently displayed percentage, clamped to `[0, 100]` (last writer wins across sweeps).
    pub fn displayed_percentage(&self) -> f64 {
        self.displayed
    }

    /// Target used by the next chart reveal.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Latest logical time seen.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of sweeps still producing frames.
    pub fn active_sweeps(&self) -> usize {
        self.sweeps.len()
    }

    /// Return `true` when a run has started and not yet completed.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, AnimationPhase::Idle | AnimationPhase::Complete)
    }

    /// Earliest time something will change without outside input: the next timer, or the
    /// current time while sweeps need frames.
    pub fn next_deadline(&self) -> Option<Duration> {
        if !self.sweeps.is_empty() {
            return Some(self.now);
        }
        self.timers.next_due()
    }

    /// Arm the automatic start.
    pub fn schedule_auto_start(&mut self) {
        self.timers
            .schedule(self.now, self.timing.auto_start_delay(), TimerEvent::AutoStart);
    }

    /// Begin a run at the current logical time.
    ///
    /// Calling this while a run is active starts an overlapping run: its timers are scheduled
    /// alongside the old ones and nothing is cancelled.
    pub fn start(&mut self) -> Vec<Cue> {
        let mut cues = Vec::new();
        self.begin_run(self.now, &mut cues);
        cues
    }

    /// Start a fresh sweep from 0 toward `value` at the current logical time.
    ///
    /// Runs independently of any in-flight sweep; when several are active, each frame applies
    /// them in start order so the newest one wins.
    pub fn update_percentage(&mut self, value: f64) -> SweepId {
        self.target = value;
        let id = self.spawn_sweep(self.now, value);
        tracing::debug!(sweep = id.0, target = value, "percentage update sweep");
        id
    }

    /// Advance to `now`.
    ///
    /// Timer due times and sweep end times that fall inside the tick are replayed in time order,
    /// so a single late tick produces the same phase sequence as a steady frame clock. Every live
    /// sweep then renders one frame at `now`.
    pub fn tick(&mut self, now: Duration) -> Vec<Cue> {
        let target = self.now.max(now);
        let mut cues = Vec::new();
        loop {
            let next_timer = self.timers.next_due().filter(|due| *due <= target);
            let next_end = self
                .sweeps
                .iter()
                .filter(|task| !task.is_finished())
                .map(SweepTask::end_time)
                .filter(|end| *end <= target)
                .min();
            match (next_timer, next_end) {
                (Some(due), Some(end)) if end < due => self.advance_sweeps_to(end, &mut cues),
                (Some(due), _) => {
                    self.now = self.now.max(due);
                    self.fire_due(&mut cues);
                }
                (None, Some(end)) => self.advance_sweeps_to(end, &mut cues),
                (None, None) => break,
            }
        }
        self.now = target;
        self.advance_sweeps(&mut cues);
        self.fire_due(&mut cues);
        cues
    }

    fn advance_sweeps_to(&mut self, at: Duration, cues: &mut Vec<Cue>) {
        self.now = self.now.max(at);
        self.advance_sweeps(cues);
    }

    fn begin_run(&mut self, at: Duration, cues: &mut Vec<Cue>) {
        if self.is_running() {
            tracing::warn!(phase = ?self.phase, "start requested while a run is active");
        }
        let run = RunId(self.next_run);
        self.next_run += 1;
        self.current_run = Some(run);
        self.run_sweep = None;
        self.phase = AnimationPhase::ScatterRevealing;
        tracing::debug!(run = run.0, at_ms = at.as_millis() as u64, "run started");

        self.timers.schedule(
            at,
            self.timing.chart_reveal_delay(),
            TimerEvent::RevealChart { run },
        );
        self.timers.schedule(
            at,
            self.timing.completion_delay(),
            TimerEvent::Complete { run },
        );
        cues.push(Cue::RevealItems { run, at });
    }

    fn spawn_sweep(&mut self, at: Duration, target: f64) -> SweepId {
        let id = SweepId(self.next_sweep);
        self.next_sweep += 1;
        self.sweeps.push(SweepTask::new(id, at, target, &self.timing));
        id
    }

    fn advance_phase(&mut self, run: Option<RunId>, phase: AnimationPhase) {
        if run.is_none() || run != self.current_run || phase <= self.phase {
            return;
        }
        tracing::debug!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
    }

    fn fire_due(&mut self, cues: &mut Vec<Cue>) {
        while let Some(fired) = self.timers.pop_due(self.now) {
            let at = fired.due;
            match fired.event {
                TimerEvent::AutoStart => self.begin_run(at, cues),
                TimerEvent::RevealChart { run } => {
                    self.advance_phase(Some(run), AnimationPhase::ChartRevealing);
                    cues.push(Cue::RevealChart { run, at });
                    let sweep = self.spawn_sweep(at, self.target);
                    if Some(run) == self.current_run {
                        self.run_sweep = Some(sweep);
                    }
                }
                TimerEvent::Separate { sweep, target } => {
                    if Some(sweep) == self.run_sweep {
                        self.advance_phase(self.current_run, AnimationPhase::SeparatingSectors);
                    }
                    let offsets = self.geometry.separation(target, self.separation_distance);
                    cues.push(Cue::Separate { sweep, offsets, at });
                }
                TimerEvent::Complete { run } => {
                    self.advance_phase(Some(run), AnimationPhase::Complete);
                    cues.push(Cue::Complete { run, at });
                }
            }
        }
    }

    fn advance_sweeps(&mut self, cues: &mut Vec<Cue>) {
        let now = self.now;
        let run_sweep = self.run_sweep;
        let mut run_sweep_moved = false;
        let mut finished = Vec::new();
        for task in &mut self.sweeps {
            let SweepStep::Frame {
                percentage,
                finished: done,
            } = task.advance(now)
            else {
                continue;
            };
            run_sweep_moved |= Some(task.id()) == run_sweep;
            self.displayed = clamp_percentage(percentage);
            cues.push(Cue::Sectors {
                sweep: task.id(),
                pair: self.geometry.sectors(percentage),
            });
            if done {
                finished.push((task.id(), task.target(), task.end_time()));
            }
        }
        self.sweeps.retain(|t| !t.is_finished());

        if run_sweep_moved {
            self.advance_phase(self.current_run, AnimationPhase::PercentageSweeping);
        }
        for (sweep, target, end) in finished {
            self.timers.schedule(
                end,
                self.timing.separation_delay(),
                TimerEvent::Separate { sweep, target },
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;
