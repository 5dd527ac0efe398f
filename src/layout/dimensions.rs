use crate::foundation::config::Tuning;
use crate::foundation::core::{ContainerSize, usable_extent};
use crate::foundation::math::round_half_up;

/// Size-dependent constants derived from one container measurement.
///
/// Recomputed wholesale on every resize; never patched field by field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Effective container width (after default substitution).
    pub modal_width: f64,
    /// Effective container height (after default substitution).
    pub modal_height: f64,
    /// Chart box width; percent offsets resolve against it.
    pub chart_width: f64,
    /// Chart box height; percent offsets resolve against it.
    pub chart_height: f64,
    /// Image card width.
    pub image_width: f64,
    /// Image card height.
    pub image_height: f64,
    /// Horizontal scatter center.
    pub center_x: f64,
    /// Vertical scatter center.
    pub center_y: f64,
    /// Base scatter radius before spread and jitter.
    pub scatter_radius: f64,
    /// Radius jitter unit.
    pub random_delta: f64,
}

impl Dimensions {
    /// Resolve dimensions for a measured container size.
    ///
    /// Each axis that is zero, negative or not finite falls back to the tuning default
    /// independently, so the result never contains NaN or zero extents. Pure: the same input
    /// always yields the same record.
    pub fn resolve(size: ContainerSize, tuning: &Tuning) -> Self {
        let layout = &tuning.layout;
        let width = if usable_extent(size.width) {
            size.width
        } else {
            layout.default_width
        };
        let height = if usable_extent(size.height) {
            size.height
        } else {
            layout.default_height
        };
        let min_side = width.min(height);

        let image_width = round_half_up(width * layout.image_width_ratio * layout.image_width_scale)
            .max(layout.image_min_width)
            .min(layout.image_max_width);

        Self {
            modal_width: width,
            modal_height: height,
            chart_width: round_half_up(width * layout.chart_width_ratio),
            chart_height: round_half_up(height * layout.chart_height_ratio),
            image_width,
            image_height: round_half_up(image_width * layout.image_aspect_ratio),
            center_x: round_half_up(width * layout.center_x_ratio),
            center_y: round_half_up(height * layout.center_y_ratio),
            scatter_radius: round_half_up(min_side * tuning.scatter.radius_ratio),
            random_delta: round_half_up(min_side * tuning.scatter.random_delta_ratio),
        }
    }

    /// Chart box extents with each axis floored at one pixel, for use as a divisor.
    pub(crate) fn chart_divisors(&self) -> (f64, f64) {
        (self.chart_width.max(1.0), self.chart_height.max(1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dimensions.rs"]
mod tests;
