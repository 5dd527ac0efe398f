use rand::Rng;
use rand::seq::SliceRandom;

use crate::foundation::config::{OffsetBounds, ScatterTuning};
use crate::foundation::core::PercentOffset;
use crate::foundation::math::{clamp_unordered, round_to_places};
use crate::layout::dimensions::Dimensions;

/// Final placement of one scattered item, relative to the centered resting point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScatterPosition {
    /// Horizontal offset in percent of chart width (unbounded).
    pub x_percent: f64,
    /// Vertical offset in percent of chart height (unbounded).
    pub y_percent: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Delay before this item's reveal transition starts, in seconds.
    pub delay_secs: f64,
}

impl ScatterPosition {
    /// Raw offset as produced by the layout pass.
    pub fn offset(&self) -> PercentOffset {
        PercentOffset::new(self.x_percent, self.y_percent)
    }

    /// Offset pulled into `bounds`. Values already inside are returned unchanged.
    pub fn bounded(&self, bounds: &OffsetBounds) -> PercentOffset {
        PercentOffset::new(
            clamp_unordered(self.x_percent, bounds.min_x, bounds.max_x),
            clamp_unordered(self.y_percent, bounds.min_y, bounds.max_y),
        )
    }
}

/// Generate `count` scatter positions around the chart center.
///
/// Items sit on equidistant base angles with uniform angle, radius and rotation jitter drawn
/// from `rng`. Reveal delays are a shuffled permutation of `0, step, 2*step, ...`, so every item
/// gets a distinct slot.
pub fn generate_positions<R: Rng + ?Sized>(
    count: usize,
    dims: &Dimensions,
    tuning: &ScatterTuning,
    rng: &mut R,
) -> Vec<ScatterPosition> {
    let mut delay_slots: Vec<usize> = (0..count).collect();
    delay_slots.shuffle(rng);

    let spread = tuning.spread_multiplier;
    let (chart_w, chart_h) = dims.chart_divisors();

    delay_slots
        .iter()
        .enumerate()
        .map(|(index, &slot)| {
            let base_angle = (index as f64 / count as f64) * std::f64::consts::TAU;
            let angle_jitter = centered_unit(rng) * tuning.angle_variation;
            let radius_jitter = centered_unit(rng) * dims.random_delta * spread;

            let angle = base_angle + angle_jitter;
            let radius = (dims.scatter_radius + radius_jitter) * spread;

            let x_percent = angle.cos() * radius / chart_w * 100.0;
            let y_percent = angle.sin() * radius / chart_h * 100.0;

            ScatterPosition {
                x_percent: round_to_places(x_percent, tuning.decimal_places),
                y_percent: round_to_places(y_percent, tuning.decimal_places),
                rotation_deg: centered_unit(rng) * tuning.max_rotation,
                delay_secs: slot as f64 * tuning.delay_step_secs,
            }
        })
        .collect()
}

/// Uniform sample in `[-0.5, 0.5)`.
fn centered_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>() - 0.5
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scatter.rs"]
mod tests;
