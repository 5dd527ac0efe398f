//! The public widget: owns the layout, the sequencer and the mounted scene.
//!
//! Hosts drive it with [`ChartWidget::tick`]; every timer, sweep frame and debounced resize is
//! processed against the logical time passed in.

use rand::Rng;

use crate::animation::sequencer::{AnimationPhase, Cue, Sequencer};
use crate::foundation::config::Tuning;
use crate::foundation::core::Duration;
use crate::foundation::error::{ChartError, ChartResult};
use crate::layout::dimensions::Dimensions;
use crate::layout::scatter::{ScatterPosition, generate_positions};
use crate::scene::container::{Container, ListenerId, MountId};
use crate::scene::styles::{STYLE_KEY, STYLESHEET, StyleRegistry};
use crate::scene::tree::{SceneTree, build_scene};
use crate::session::resize::{ResizeCoordinator, bounded_offsets};

/// Callback invoked when a run's completion timer fires.
pub type CompletionCallback = Box<dyn FnMut()>;

/// Construction options for [`ChartWidget`].
pub struct WidgetOptions {
    /// Host element. Required.
    pub container: Option<Container>,
    /// Image references; empty means placeholders for the default item count.
    pub images: Vec<String>,
    /// Target percentage for the pie.
    pub percentage: f64,
    /// Start automatically after the auto-start delay.
    pub auto_play: bool,
    /// Invoked once per run when its completion timer fires.
    pub on_animation_complete: Option<CompletionCallback>,
    /// Layout and timing constants.
    pub tuning: Tuning,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            container: None,
            images: Vec::new(),
            percentage: 75.0,
            auto_play: true,
            on_animation_complete: None,
            tuning: Tuning::default(),
        }
    }
}

impl std::fmt::Debug for WidgetOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetOptions")
            .field("container", &self.container.is_some())
            .field("images", &self.images)
            .field("percentage", &self.percentage)
            .field("auto_play", &self.auto_play)
            .field("on_animation_complete", &self.on_animation_complete.is_some())
            .finish_non_exhaustive()
    }
}

impl WidgetOptions {
    /// Options with defaults targeting `container`.
    pub fn new(container: Container) -> Self {
        Self {
            container: Some(container),
            ..Self::default()
        }
    }

    /// Set image references.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Set the target percentage.
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Enable or disable the automatic start.
    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    /// Set the completion callback.
    pub fn on_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_animation_complete = Some(Box::new(f));
        self
    }

    /// Replace the tuning constants.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}

/// One scatter-and-pie animation mounted into a container.
pub struct ChartWidget {
    container: Container,
    mount: MountId,
    listener: Option<ListenerId>,
    tuning: Tuning,
    dims: Dimensions,
    positions: Vec<ScatterPosition>,
    sequencer: Sequencer,
    resize: ResizeCoordinator,
    on_complete: Option<CompletionCallback>,
    destroyed: bool,
}

impl std::fmt::Debug for ChartWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartWidget")
            .field("mount", &self.mount)
            .field("phase", &self.sequencer.phase())
            .field("dims", &self.dims)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl ChartWidget {
    /// Build and mount a widget at logical time `now`, drawing layout jitter from the thread rng.
    pub fn new(
        options: WidgetOptions,
        styles: &mut StyleRegistry,
        now: Duration,
    ) -> ChartResult<Self> {
        Self::with_rng(options, styles, now, &mut rand::rng())
    }

    /// Build and mount a widget, drawing layout jitter from `rng`.
    ///
    /// Fails with [`ChartError::InvalidArgument`] when no container is given and with
    /// [`ChartError::Validation`] when the tuning is inconsistent. Nothing is mounted on failure.
    #[tracing::instrument(skip(options, styles, rng), fields(images = options.images.len()))]
    pub fn with_rng<R: Rng + ?Sized>(
        options: WidgetOptions,
        styles: &mut StyleRegistry,
        now: Duration,
        rng: &mut R,
    ) -> ChartResult<Self> {
        let WidgetOptions {
            container,
            images,
            percentage,
            auto_play,
            on_animation_complete,
            tuning,
        } = options;
        let container =
            container.ok_or_else(|| ChartError::invalid_argument("container is required"))?;
        tuning.validate()?;

        if styles.register(STYLE_KEY, STYLESHEET) {
            tracing::debug!(key = STYLE_KEY, "stylesheet registered");
        }

        let dims = Dimensions::resolve(container.size(), &tuning);
        let count = if images.is_empty() {
            tuning.scatter.default_item_count
        } else {
            images.len()
        };
        let positions = generate_positions(count, &dims, &tuning.scatter, rng);
        let scene = build_scene(dims, &positions, &images, &tuning);
        let mount = container.mount(scene);
        let listener = container.add_resize_listener();

        let mut resize = ResizeCoordinator::new(tuning.timing.resize_debounce());
        // Resizes that happened before construction are already reflected in `dims`.
        if let Some(notice) = container.last_resize() {
            resize.notify(notice.seq, notice.at);
            resize.cancel();
        }

        let mut sequencer = Sequencer::new(&tuning, percentage, now);
        if auto_play {
            sequencer.schedule_auto_start();
        }
        tracing::debug!(items = count, ?dims, auto_play, "widget mounted");

        Ok(Self {
            container,
            mount,
            listener: Some(listener),
            tuning,
            dims,
            positions,
            sequencer,
            resize,
            on_complete: on_animation_complete,
            destroyed: false,
        })
    }

    /// Start a run at the current logical time. Repeated calls start overlapping runs.
    #[tracing::instrument(skip(self))]
    pub fn start_animation(&mut self) {
        let cues = self.sequencer.start();
        self.apply(cues);
    }

    /// Sweep from 0 to `value` starting at the current logical time.
    #[tracing::instrument(skip(self))]
    pub fn update_percentage(&mut self, value: f64) {
        self.sequencer.update_percentage(value);
    }

    /// Unregister the resize listener and detach the scene. Safe to call more than once.
    ///
    /// Pending timers keep running: their visual effects become no-ops and the completion
    /// callback still fires.
    #[tracing::instrument(skip(self))]
    pub fn destroy(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.container.remove_resize_listener(listener);
        }
        self.resize.cancel();
        if self.container.unmount(self.mount).is_some() {
            tracing::debug!("scene detached");
        }
        self.destroyed = true;
    }

    /// Advance the logical clock to `now`. Earlier times are treated as the current time.
    pub fn tick(&mut self, now: Duration) {
        let cues = self.sequencer.tick(now);
        self.apply(cues);

        let listening = self
            .listener
            .is_some_and(|l| self.container.has_resize_listener(l));
        if !listening {
            return;
        }
        if let Some(notice) = self.container.last_resize() {
            self.resize.notify(notice.seq, notice.at);
        }
        if self.resize.poll(self.sequencer.now()) {
            self.relayout();
        }
    }

    /// Phase of the latest run.
    pub fn phase(&self) -> AnimationPhase {
        self.sequencer.phase()
    }

    /// Percentage shown by the most recent sweep frame.
    pub fn displayed_percentage(&self) -> f64 {
        self.sequencer.displayed_percentage()
    }

    /// Current target percentage.
    pub fn target_percentage(&self) -> f64 {
        self.sequencer.target()
    }

    /// Scatter positions generated at construction.
    pub fn positions(&self) -> &[ScatterPosition] {
        &self.positions
    }

    /// Dimensions from the latest layout pass.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Tuning the widget runs with.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Logical time of the last tick.
    pub fn now(&self) -> Duration {
        self.sequencer.now()
    }

    /// Earliest time a tick would change anything, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        [self.sequencer.next_deadline(), self.resize.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Handle of the mounted scene.
    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// Return `true` once [`ChartWidget::destroy`] ran.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Copy of the mounted scene, or `None` once it is detached.
    pub fn snapshot(&self) -> Option<SceneTree> {
        self.container.with_scene(self.mount, SceneTree::clone)
    }

    fn apply(&mut self, cues: Vec<Cue>) {
        for cue in cues {
            if let Cue::Complete { run, .. } = cue {
                tracing::debug!(run = run.0, "animation complete");
                if let Some(callback) = self.on_complete.as_mut() {
                    callback();
                }
                continue;
            }
            let applied = self.container.with_scene_mut(self.mount, |scene| match cue {
                Cue::RevealItems { at, .. } => scene.reveal_items(at),
                Cue::RevealChart { at, .. } => scene.reveal_chart(at),
                Cue::Sectors { pair, .. } => scene.set_sectors(pair),
                Cue::Separate { offsets, at, .. } => scene.separate(offsets, at),
                Cue::Complete { .. } => {}
            });
            if applied.is_none() {
                tracing::debug!("scene detached; cue skipped");
            }
        }
    }

    #[tracing::instrument(skip(self))]
    fn relayout(&mut self) {
        self.dims = Dimensions::resolve(self.container.size(), &self.tuning);
        let offsets = bounded_offsets(&self.positions, &self.tuning.scatter.bounds);
        let dims = self.dims;
        let at = self.sequencer.now();
        if self
            .container
            .with_scene_mut(self.mount, |scene| scene.relayout(dims, &offsets, at))
            .is_some()
        {
            tracing::debug!(?dims, "relayout after resize");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/widget.rs"]
mod tests;
