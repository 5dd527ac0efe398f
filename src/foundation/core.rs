pub use kurbo::{Affine, BezPath, Point, Vec2};
pub use std::time::Duration;

/// Measured size of a host container in CSS pixels.
///
/// A zero (or otherwise unusable) axis is legal input; the dimension resolver substitutes the
/// tuning defaults for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ContainerSize {
    /// Create a size from raw width/height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return `true` when either axis cannot be used for layout as-is.
    pub fn is_degenerate(self) -> bool {
        !usable_extent(self.width) || !usable_extent(self.height)
    }
}

pub(crate) fn usable_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// An offset expressed in percent of the chart box, as used by CSS `translate(x%, y%)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PercentOffset {
    /// Horizontal offset in percent of chart width.
    pub x: f64,
    /// Vertical offset in percent of chart height.
    pub y: f64,
}

impl PercentOffset {
    /// Create an offset.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Final transform applied to a scattered item once its reveal has been triggered.
///
/// Mirrors `translate(-50% + x%, -50% + y%) rotate(r) scale(s)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemTransform {
    /// Offset from the centered resting point, in percent of the chart box.
    pub offset: PercentOffset,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl ItemTransform {
    /// The collapsed, centered transform every item starts from.
    pub fn collapsed() -> Self {
        Self {
            offset: PercentOffset::default(),
            rotation_deg: 0.0,
            scale: 0.0,
        }
    }

    /// Linear blend between two transforms, `t` in `[0, 1]` (not clamped: overshooting eases are
    /// allowed to extrapolate).
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            offset: PercentOffset::new(
                mix(self.offset.x, to.offset.x),
                mix(self.offset.y, to.offset.y),
            ),
            rotation_deg: mix(self.rotation_deg, to.rotation_deg),
            scale: mix(self.scale, to.scale),
        }
    }

    /// Convert to an affine matrix for an item of `item_size` (w, h) centered on `anchor`,
    /// resolving percentages against `percent_base`.
    ///
    /// CSS resolves `translate` percentages against the element's own box, so renderers that
    /// mimic the browser pass `item_size` here.
    pub fn to_affine(self, anchor: Point, item_size: Vec2, percent_base: Vec2) -> Affine {
        let dx = percent_base.x * self.offset.x / 100.0;
        let dy = percent_base.y * self.offset.y / 100.0;
        Affine::translate(anchor.to_vec2() + Vec2::new(dx, dy))
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-item_size * 0.5)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
