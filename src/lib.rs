//! Chartburst is a scatter-and-pie reveal animation engine.
//!
//! A widget scatters a set of image cards around a center point, reveals a pie chart, sweeps it
//! to a target percentage and pulls the two sectors apart. Everything runs against a logical
//! clock the host advances:
//!
//! - Create a [`Container`] and a [`StyleRegistry`]
//! - Build a [`ChartWidget`] from [`WidgetOptions`]
//! - Call [`ChartWidget::tick`] from the frame loop and read [`ChartWidget::snapshot`]
//! - Optionally render snapshots with [`render_svg`] or [`render_png`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod chart;
pub(crate) mod layout;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::config::{
    LayoutTuning, OffsetBounds, PieTuning, ScatterTuning, TimingTuning, Tuning,
};
pub use crate::foundation::core::{
    Affine, BezPath, ContainerSize, Duration, ItemTransform, PercentOffset, Point, Vec2,
};
pub use crate::foundation::error::{ChartError, ChartResult};
pub use crate::foundation::math::{round_half_up, round_to_places};

pub use crate::animation::ease::Ease;
pub use crate::animation::sequencer::{AnimationPhase, Cue, RunId, Sequencer};
pub use crate::animation::sweep::{SweepId, SweepStep, SweepTask};
pub use crate::animation::timer::{Fired, TimerId, TimerQueue};
pub use crate::chart::sector::{
    PieGeometry, Sector, SectorPair, SectorShape, SeparationOffsets, clamp_percentage, sectors,
    sweeps,
};
pub use crate::layout::dimensions::Dimensions;
pub use crate::layout::scatter::{ScatterPosition, generate_positions};
pub use crate::render::raster::{
    RasterFrame, RasterOptions, rasterize_png, rasterize_svg, render_frame, render_png,
};
pub use crate::render::svg::render_svg;
pub use crate::scene::container::{Container, ListenerId, MountId, ResizeNotice};
pub use crate::scene::placeholder::{Placeholder, placeholder};
pub use crate::scene::styles::{STYLE_KEY, STYLESHEET, StyleRegistry};
pub use crate::scene::tree::{
    ChartNode, ChartVisual, ImageSource, ItemNode, ItemVisual, OverlayNode, SceneTree,
    SectorSlot, build_scene,
};
pub use crate::session::resize::{ResizeCoordinator, bounded_offsets};
pub use crate::session::widget::{ChartWidget, CompletionCallback, WidgetOptions};
