//! Retained visual tree for one widget instance.
//!
//! Nodes store the *target* state the widget last applied plus enough history to sample the
//! in-flight transition at any logical time. Sampling is what the snapshot renderer uses; the
//! widget itself only ever writes targets.

use crate::animation::ease::Ease;
use crate::chart::sector::{PieGeometry, SectorPair, SeparationOffsets};
use crate::foundation::config::{PieTuning, TimingTuning, Tuning};
use crate::foundation::core::{Duration, ItemTransform, PercentOffset, Vec2};
use crate::layout::dimensions::Dimensions;
use crate::layout::scatter::ScatterPosition;
use crate::scene::placeholder::{Placeholder, placeholder};

/// Artwork shown on an item card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ImageSource {
    /// Caller-supplied image reference.
    Url(String),
    /// Generated "Image N" card.
    Placeholder(Placeholder),
}

/// Which pie sector a node refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SectorSlot {
    /// The sector spanning the percentage.
    A,
    /// The remainder.
    B,
}

/// Texture layer clipped by one sector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayNode {
    /// Sector used as the mask.
    pub mask: SectorSlot,
    /// Whether the layer is desaturated.
    pub grayscale: bool,
}

/// Sampled appearance of an item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemVisual {
    /// Effective transform.
    pub transform: ItemTransform,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl ItemVisual {
    fn hidden() -> Self {
        Self {
            transform: ItemTransform::collapsed(),
            opacity: 0.0,
        }
    }
}

/// Sampled appearance of the chart container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartVisual {
    /// Container scale.
    pub scale: f64,
    /// Container opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation of sector A in view-box units.
    pub offset_a: Vec2,
    /// Translation of sector B in view-box units.
    pub offset_b: Vec2,
}

/// One scattered image card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemNode {
    /// Zero-based index.
    pub index: usize,
    /// Card artwork.
    pub source: ImageSource,
    /// Offset the item moves to when revealed.
    pub final_offset: PercentOffset,
    /// Rotation the item settles at.
    pub rotation_deg: f64,
    /// Transition delay of this item.
    pub delay: Duration,
    /// Set once the reveal cue has been applied.
    pub animated: bool,
    /// Target transform currently applied.
    pub transform: ItemTransform,
    /// Appearance the running transition started from.
    pub transition_from: ItemVisual,
    /// When the running transition was triggered (before `delay`).
    pub transition_start: Option<Duration>,
}

impl ItemNode {
    fn target(&self) -> ItemTransform {
        ItemTransform {
            offset: self.final_offset,
            rotation_deg: self.rotation_deg,
            scale: 1.0,
        }
    }

    /// Sample the item at `now` for a transition of length `transition`.
    pub fn visual_at(&self, now: Duration, transition: Duration) -> ItemVisual {
        let settled = ItemVisual {
            transform: self.transform,
            opacity: if self.animated { 1.0 } else { 0.0 },
        };
        let Some(start) = self.transition_start else {
            return settled;
        };
        let p = transition_progress(now, start + self.delay, transition);
        if p >= 1.0 {
            return settled;
        }
        let e = Ease::SNAP.apply(p);
        let from = self.transition_from;
        ItemVisual {
            transform: from.transform.lerp(settled.transform, e),
            opacity: (from.opacity + (settled.opacity - from.opacity) * e).clamp(0.0, 1.0),
        }
    }

    fn retarget(&mut self, at: Duration, transition: Duration) {
        self.transition_from = self.visual_at(at, transition);
        self.transform = self.target();
        self.transition_start = Some(at);
    }
}

/// The pie chart container.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartNode {
    /// Set once the reveal cue has been applied.
    pub revealed: bool,
    /// When the reveal was applied.
    pub revealed_at: Option<Duration>,
    /// Current sector paths.
    pub sectors: SectorPair,
    /// Target separation offsets.
    pub offsets: SeparationOffsets,
    /// Offsets the running separation transition started from.
    pub offsets_from: SeparationOffsets,
    /// When the latest separation was applied.
    pub separated_at: Option<Duration>,
    /// Texture layers, one per sector.
    pub overlays: [OverlayNode; 2],
}

impl ChartNode {
    fn new(pie: &PieTuning) -> Self {
        Self {
            revealed: false,
            revealed_at: None,
            sectors: PieGeometry::from_tuning(pie).sectors(0.0),
            offsets: SeparationOffsets::default(),
            offsets_from: SeparationOffsets::default(),
            separated_at: None,
            overlays: [
                OverlayNode {
                    mask: SectorSlot::A,
                    grayscale: false,
                },
                OverlayNode {
                    mask: SectorSlot::B,
                    grayscale: true,
                },
            ],
        }
    }

    fn offsets_at(&self, now: Duration, transition: Duration) -> SeparationOffsets {
        let Some(start) = self.separated_at else {
            return self.offsets;
        };
        let p = transition_progress(now, start, transition);
        if p >= 1.0 {
            return self.offsets;
        }
        let e = Ease::SNAP.apply(p);
        let from = self.offsets_from;
        SeparationOffsets {
            a: from.a.lerp(self.offsets.a, e),
            b: from.b.lerp(self.offsets.b, e),
        }
    }
}

/// Everything mounted into a container for one widget.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneTree {
    /// Dimensions the tree was last laid out with.
    pub dims: Dimensions,
    /// Scattered cards in creation order.
    pub items: Vec<ItemNode>,
    /// The chart container.
    pub chart: ChartNode,
    /// Side of the pie view box.
    pub view_box: f64,
    timing: TimingTuning,
}

impl SceneTree {
    /// Card width and height in pixels.
    pub fn card_size(&self) -> Vec2 {
        Vec2::new(self.dims.image_width, self.dims.image_height)
    }

    /// Apply final transforms to every item at `at`.
    pub fn reveal_items(&mut self, at: Duration) {
        let transition = self.timing.item_transition();
        for item in &mut self.items {
            item.animated = true;
            item.retarget(at, transition);
        }
    }

    /// Start the chart container reveal at `at`. Later calls keep the first reveal time.
    pub fn reveal_chart(&mut self, at: Duration) {
        if !self.chart.revealed {
            self.chart.revealed = true;
            self.chart.revealed_at = Some(at);
        }
    }

    /// Replace the sector paths.
    pub fn set_sectors(&mut self, pair: SectorPair) {
        self.chart.sectors = pair;
    }

    /// Move the sectors to `offsets`, transitioning from wherever they are at `at`.
    pub fn separate(&mut self, offsets: SeparationOffsets, at: Duration) {
        let transition = self.timing.separation_transition();
        self.chart.offsets_from = self.chart.offsets_at(at, transition);
        self.chart.offsets = offsets;
        self.chart.separated_at = Some(at);
    }

    /// Adopt new dimensions and final offsets (one per item, extra entries ignored).
    ///
    /// Items that are already animated transition to the new offset; the rest only update the
    /// offset they will move to.
    pub fn relayout(&mut self, dims: Dimensions, offsets: &[PercentOffset], at: Duration) {
        self.dims = dims;
        let transition = self.timing.item_transition();
        for (item, offset) in self.items.iter_mut().zip(offsets) {
            item.final_offset = *offset;
            if item.animated {
                item.retarget(at, transition);
            }
        }
    }

    /// Sample item `index` at `now`.
    pub fn item_visual(&self, index: usize, now: Duration) -> Option<ItemVisual> {
        let transition = self.timing.item_transition();
        self.items.get(index).map(|item| item.visual_at(now, transition))
    }

    /// Sample the chart container at `now`.
    pub fn chart_visual(&self, now: Duration) -> ChartVisual {
        let offsets = self.chart.offsets_at(now, self.timing.separation_transition());
        let (scale, opacity) = match self.chart.revealed_at {
            Some(start) if self.chart.revealed => {
                let p = transition_progress(now, start, self.timing.chart_transition());
                (Ease::SNAP.apply(p), Ease::BACK_OUT.apply(p).clamp(0.0, 1.0))
            }
            _ => (0.0, 0.0),
        };
        ChartVisual {
            scale,
            opacity,
            offset_a: offsets.a,
            offset_b: offsets.b,
        }
    }
}

/// Build the scene for freshly generated positions.
///
/// Item `i` shows `images[i]` when present and non-empty, a placeholder otherwise. Offsets are
/// stored unbounded; bounds only apply when a resize re-lays the tree out.
pub fn build_scene(
    dims: Dimensions,
    positions: &[ScatterPosition],
    images: &[String],
    tuning: &Tuning,
) -> SceneTree {
    let items = positions
        .iter()
        .enumerate()
        .map(|(index, pos)| {
            let source = match images.get(index) {
                Some(url) if !url.is_empty() => ImageSource::Url(url.clone()),
                _ => ImageSource::Placeholder(placeholder(index, &dims, &tuning.layout)),
            };
            ItemNode {
                index,
                source,
                final_offset: pos.offset(),
                rotation_deg: pos.rotation_deg,
                delay: Duration::from_secs_f64(pos.delay_secs.max(0.0)),
                animated: false,
                transform: ItemTransform::collapsed(),
                transition_from: ItemVisual::hidden(),
                transition_start: None,
            }
        })
        .collect();

    SceneTree {
        dims,
        items,
        chart: ChartNode::new(&tuning.pie),
        view_box: tuning.pie.view_box,
        timing: tuning.timing.clone(),
    }
}

/// Linear progress of a transition of length `len` beginning at `begin`, in `[0, 1]`.
pub(crate) fn transition_progress(now: Duration, begin: Duration, len: Duration) -> f64 {
    if now < begin {
        return 0.0;
    }
    if len.is_zero() {
        return 1.0;
    }
    ((now - begin).as_secs_f64() / len.as_secs_f64()).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
