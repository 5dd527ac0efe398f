use crate::animation::ease::Ease;
use crate::foundation::core::Duration;
use crate::foundation::error::{ChartError, ChartResult};

/// Every numeric constant that shapes the widget, grouped by concern.
///
/// All groups default to the stock look; JSON input may override any subset of fields.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Size-dependent layout ratios.
    pub layout: LayoutTuning,
    /// Scatter placement parameters.
    pub scatter: ScatterTuning,
    /// Phase timings.
    pub timing: TimingTuning,
    /// Pie geometry in view-box units.
    pub pie: PieTuning,
}

/// Ratios used by the dimension resolver.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    /// Width substituted when the container reports an unusable width.
    pub default_width: f64,
    /// Height substituted when the container reports an unusable height.
    pub default_height: f64,
    /// Chart box width as a fraction of container width.
    pub chart_width_ratio: f64,
    /// Chart box height as a fraction of container height.
    pub chart_height_ratio: f64,
    /// Horizontal center as a fraction of container width.
    pub center_x_ratio: f64,
    /// Vertical center as a fraction of container height.
    pub center_y_ratio: f64,
    /// Image card width as a fraction of container width.
    pub image_width_ratio: f64,
    /// Extra scale applied on top of `image_width_ratio`.
    pub image_width_scale: f64,
    /// Lower clamp for the image card width.
    pub image_min_width: f64,
    /// Upper clamp for the image card width.
    pub image_max_width: f64,
    /// Card height as a fraction of card width.
    pub image_aspect_ratio: f64,
    /// Placeholder artwork height as a fraction of card height.
    pub placeholder_height_ratio: f64,
    /// Placeholder label font size as a fraction of card width.
    pub placeholder_font_ratio: f64,
    /// Smallest placeholder label font size.
    pub placeholder_min_font: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            default_width: 480.0,
            default_height: 350.0,
            chart_width_ratio: 0.9,
            chart_height_ratio: 0.92,
            center_x_ratio: 0.5,
            center_y_ratio: 0.5,
            image_width_ratio: 0.25,
            image_width_scale: 0.9,
            image_min_width: 20.0,
            image_max_width: 150.0,
            image_aspect_ratio: 0.65,
            placeholder_height_ratio: 0.55,
            placeholder_font_ratio: 0.08,
            placeholder_min_font: 10.0,
        }
    }
}

/// Parameters of the randomized scatter layout and its resize-time bounds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScatterTuning {
    /// Item count used when no images are supplied.
    pub default_item_count: usize,
    /// Scatter radius as a fraction of the smaller container side.
    pub radius_ratio: f64,
    /// Radius jitter unit as a fraction of the smaller container side.
    pub random_delta_ratio: f64,
    /// Multiplier applied to the jitter and to the jittered radius.
    pub spread_multiplier: f64,
    /// Full width of the uniform angle jitter window, in radians.
    pub angle_variation: f64,
    /// Full width of the uniform rotation window, in degrees.
    pub max_rotation: f64,
    /// Stagger step between reveal slots, in seconds.
    pub delay_step_secs: f64,
    /// Decimal places kept on percent offsets.
    pub decimal_places: u32,
    /// Resize-time clamp bounds.
    pub bounds: OffsetBounds,
}

impl Default for ScatterTuning {
    fn default() -> Self {
        Self {
            default_item_count: 7,
            radius_ratio: 0.40,
            random_delta_ratio: 0.01,
            spread_multiplier: 3.0,
            angle_variation: 0.25,
            max_rotation: 20.0,
            delay_step_secs: 0.05,
            decimal_places: 2,
            bounds: OffsetBounds::default(),
        }
    }
}

/// Clamp box for percent offsets, applied only when positions are re-bounded on resize.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OffsetBounds {
    /// Smallest horizontal offset (percent).
    pub min_x: f64,
    /// Largest horizontal offset (percent).
    pub max_x: f64,
    /// Smallest vertical offset (percent).
    pub min_y: f64,
    /// Largest vertical offset (percent).
    pub max_y: f64,
}

impl Default for OffsetBounds {
    fn default() -> Self {
        Self {
            min_x: -810.0,
            max_x: 180.0,
            min_y: -180.0,
            max_y: 180.0,
        }
    }
}

/// Phase timings in milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingTuning {
    /// Delay between construction and the automatic start.
    pub auto_start_delay_ms: u64,
    /// Delay between start and the chart reveal (which also kicks off the sweep).
    pub chart_reveal_delay_ms: u64,
    /// Delay between start and the completion callback.
    pub completion_delay_ms: u64,
    /// Internal delay of a sweep before it begins moving.
    pub sweep_delay_ms: u64,
    /// Sweep length once moving.
    pub sweep_duration_ms: u64,
    /// Easing applied to sweep progress.
    pub sweep_ease: Ease,
    /// Delay between sweep completion and the sector separation.
    pub separation_delay_ms: u64,
    /// Visual transition length of the sector separation.
    pub separation_transition_ms: u64,
    /// Visual transition length of an item reveal.
    pub item_transition_ms: u64,
    /// Visual transition length of the chart reveal.
    pub chart_transition_ms: u64,
    /// Trailing debounce applied to resize notifications.
    pub resize_debounce_ms: u64,
}

impl Default for TimingTuning {
    fn default() -> Self {
        Self {
            auto_start_delay_ms: 500,
            chart_reveal_delay_ms: 200,
            completion_delay_ms: 4500,
            sweep_delay_ms: 500,
            sweep_duration_ms: 1500,
            sweep_ease: Ease::OutCubic,
            separation_delay_ms: 0,
            separation_transition_ms: 500,
            item_transition_ms: 300,
            chart_transition_ms: 600,
            resize_debounce_ms: 100,
        }
    }
}

impl TimingTuning {
    /// Auto-start delay as a [`Duration`].
    pub fn auto_start_delay(&self) -> Duration {
        Duration::from_millis(self.auto_start_delay_ms)
    }

    /// Chart reveal delay as a [`Duration`].
    pub fn chart_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.chart_reveal_delay_ms)
    }

    /// Completion delay as a [`Duration`].
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Sweep internal delay as a [`Duration`].
    pub fn sweep_delay(&self) -> Duration {
        Duration::from_millis(self.sweep_delay_ms)
    }

    /// Sweep length as a [`Duration`].
    pub fn sweep_duration(&self) -> Duration {
        Duration::from_millis(self.sweep_duration_ms)
    }

    /// Separation delay as a [`Duration`].
    pub fn separation_delay(&self) -> Duration {
        Duration::from_millis(self.separation_delay_ms)
    }

    /// Resize debounce window as a [`Duration`].
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Separation transition length as a [`Duration`].
    pub fn separation_transition(&self) -> Duration {
        Duration::from_millis(self.separation_transition_ms)
    }

    /// Per-item reveal transition length as a [`Duration`].
    pub fn item_transition(&self) -> Duration {
        Duration::from_millis(self.item_transition_ms)
    }

    /// Chart container reveal transition length as a [`Duration`].
    pub fn chart_transition(&self) -> Duration {
        Duration::from_millis(self.chart_transition_ms)
    }
}

/// Pie geometry in view-box units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PieTuning {
    /// Side of the square view box.
    pub view_box: f64,
    /// Circle center X.
    pub center_x: f64,
    /// Circle center Y.
    pub center_y: f64,
    /// Circle radius.
    pub radius: f64,
    /// Angle (degrees, SVG space) at which sector A starts.
    pub start_angle_deg: f64,
    /// Sweeps at or below this are empty; sweeps within it of 360 are full circles.
    pub epsilon_deg: f64,
    /// Distance each sector travels outward when separated.
    pub separation_distance: f64,
}

impl Default for PieTuning {
    fn default() -> Self {
        Self {
            view_box: 180.0,
            center_x: 90.0,
            center_y: 90.0,
            radius: 75.0,
            start_angle_deg: -90.0,
            epsilon_deg: 0.0001,
            separation_distance: 6.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON and validate the result.
    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        let tuning: Self = serde_json::from_str(s)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make layout or timing meaningless.
    pub fn validate(&self) -> ChartResult<()> {
        let l = &self.layout;
        for (name, v) in [
            ("layout.default_width", l.default_width),
            ("layout.default_height", l.default_height),
            ("layout.chart_width_ratio", l.chart_width_ratio),
            ("layout.chart_height_ratio", l.chart_height_ratio),
            ("layout.image_aspect_ratio", l.image_aspect_ratio),
            ("pie.view_box", self.pie.view_box),
            ("pie.radius", self.pie.radius),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChartError::validation(format!("{name} must be > 0")));
            }
        }
        if l.image_min_width > l.image_max_width {
            return Err(ChartError::validation(
                "layout.image_min_width must be <= layout.image_max_width",
            ));
        }

        let s = &self.scatter;
        if s.default_item_count == 0 {
            return Err(ChartError::validation(
                "scatter.default_item_count must be > 0",
            ));
        }
        if !s.delay_step_secs.is_finite() || s.delay_step_secs < 0.0 {
            return Err(ChartError::validation(
                "scatter.delay_step_secs must be >= 0",
            ));
        }
        let b = s.bounds;
        if b.min_x > b.max_x || b.min_y > b.max_y {
            return Err(ChartError::validation(
                "scatter.bounds min must be <= max on both axes",
            ));
        }

        let p = &self.pie;
        if !p.epsilon_deg.is_finite() || p.epsilon_deg < 0.0 || p.epsilon_deg >= 180.0 {
            return Err(ChartError::validation("pie.epsilon_deg must be in [0, 180)"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
