//! Pie sector geometry.
//!
//! A percentage splits one circle into two contiguous sectors: A (the filled share) starting at
//! the configured start angle, and B (the remainder) starting where A ends. Angles are degrees in
//! SVG space (y down), so increasing angles sweep clockwise and `-90` is 12 o'clock.

use kurbo::{Arc, BezPath, Point, Vec2};

use crate::foundation::config::PieTuning;

const FULL_CIRCLE: f64 = 360.0;
const HALF_CIRCLE: f64 = 180.0;
const BEZ_TOLERANCE: f64 = 0.01;

/// Circle shared by both sectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieGeometry {
    /// Circle center in view-box units.
    pub center: Point,
    /// Circle radius in view-box units.
    pub radius: f64,
    /// Angle where sector A starts, in degrees.
    pub start_angle_deg: f64,
    /// Degenerate-sweep threshold, in degrees.
    pub epsilon_deg: f64,
}

/// Path outline of one sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectorShape {
    /// Nothing to draw.
    Empty,
    /// Whole disc, drawn as two joined half arcs from `start` through `mid`.
    Full {
        /// Rim point at the start angle.
        start: Point,
        /// Rim point opposite `start`.
        mid: Point,
    },
    /// Center, rim start, one arc to rim end.
    Wedge {
        /// Rim point at the start angle.
        start: Point,
        /// Rim point at the end angle.
        end: Point,
        /// SVG large-arc flag (sweep above 180 degrees).
        large_arc: bool,
    },
}

/// One pie sector with its outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Start angle in degrees.
    pub start_deg: f64,
    /// Angular extent in degrees.
    pub sweep_deg: f64,
    /// Resolved outline.
    pub shape: SectorShape,
}

/// The two complementary sector paths for one percentage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectorPair {
    /// SVG path data of the filled sector.
    pub path_a: String,
    /// SVG path data of the remainder sector.
    pub path_b: String,
    /// Percentage after clamping to `[0, 100]`.
    pub percentage: f64,
    /// Sweep of sector A in degrees.
    pub sweep_a_deg: f64,
    /// Sweep of sector B in degrees.
    pub sweep_b_deg: f64,
}

/// Outward offsets that pull the two sectors apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeparationOffsets {
    /// Translation of sector A.
    pub a: Vec2,
    /// Translation of sector B.
    pub b: Vec2,
}

impl Default for PieGeometry {
    fn default() -> Self {
        Self::from_tuning(&PieTuning::default())
    }
}

impl PieGeometry {
    /// Build the geometry from tuning values.
    pub fn from_tuning(t: &PieTuning) -> Self {
        Self {
            center: Point::new(t.center_x, t.center_y),
            radius: t.radius,
            start_angle_deg: t.start_angle_deg,
            epsilon_deg: t.epsilon_deg,
        }
    }

    /// Rim point at `deg` degrees.
    pub fn polar(&self, deg: f64) -> Point {
        let rad = deg.to_radians();
        Point::new(
            self.center.x + self.radius * rad.cos(),
            self.center.y + self.radius * rad.sin(),
        )
    }

    /// Resolve a sector outline for a start angle and sweep.
    pub fn sector(&self, start_deg: f64, sweep_deg: f64) -> Sector {
        let shape = if sweep_deg <= self.epsilon_deg {
            SectorShape::Empty
        } else if sweep_deg >= FULL_CIRCLE - self.epsilon_deg {
            SectorShape::Full {
                start: self.polar(start_deg),
                mid: self.polar(start_deg + HALF_CIRCLE),
            }
        } else {
            SectorShape::Wedge {
                start: self.polar(start_deg),
                end: self.polar(start_deg + sweep_deg),
                large_arc: sweep_deg > HALF_CIRCLE,
            }
        };
        Sector {
            center: self.center,
            radius: self.radius,
            start_deg,
            sweep_deg,
            shape,
        }
    }

    /// Both sectors for `percentage` (clamped to `[0, 100]`).
    pub fn sector_shapes(&self, percentage: f64) -> (Sector, Sector) {
        let (sweep_a, sweep_b) = sweeps(percentage);
        (
            self.sector(self.start_angle_deg, sweep_a),
            self.sector(self.start_angle_deg + sweep_a, sweep_b),
        )
    }

    /// Path data for both sectors at `percentage`.
    pub fn sectors(&self, percentage: f64) -> SectorPair {
        let (a, b) = self.sector_shapes(percentage);
        SectorPair {
            path_a: a.to_svg_d(),
            path_b: b.to_svg_d(),
            percentage: clamp_percentage(percentage),
            sweep_a_deg: a.sweep_deg,
            sweep_b_deg: b.sweep_deg,
        }
    }

    /// Offsets moving each sector `distance` units outward along its centroid direction.
    pub fn separation(&self, percentage: f64, distance: f64) -> SeparationOffsets {
        let (a, b) = self.sector_shapes(percentage);
        SeparationOffsets {
            a: a.outward_unit() * distance,
            b: b.outward_unit() * distance,
        }
    }
}

impl Sector {
    /// Angle bisecting the sweep, in degrees.
    pub fn centroid_angle_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    /// Unit vector from the center through the centroid angle.
    pub fn outward_unit(&self) -> Vec2 {
        Vec2::from_angle(self.centroid_angle_deg().to_radians())
    }

    /// Return `true` when the sector draws nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self.shape, SectorShape::Empty)
    }

    /// SVG path data (`d` attribute). Empty sectors produce an empty string.
    pub fn to_svg_d(&self) -> String {
        let (cx, cy, r) = (self.center.x, self.center.y, self.radius);
        match self.shape {
            SectorShape::Empty => String::new(),
            SectorShape::Full { start, mid } => format!(
                "M {cx} {cy} L {} {} A {r} {r} 0 0 1 {} {} A {r} {r} 0 0 1 {} {} Z",
                start.x, start.y, mid.x, mid.y, start.x, start.y
            ),
            SectorShape::Wedge {
                start,
                end,
                large_arc,
            } => format!(
                "M {cx} {cy} L {} {} A {r} {r} 0 {} 1 {} {} Z",
                start.x,
                start.y,
                u8::from(large_arc),
                end.x,
                end.y
            ),
        }
    }

    /// Outline as a `kurbo` path (arcs approximated by cubic segments).
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let sweep = match self.shape {
            SectorShape::Empty => return path,
            SectorShape::Full { .. } => FULL_CIRCLE,
            SectorShape::Wedge { .. } => self.sweep_deg,
        };
        let arc = Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle: self.start_deg.to_radians(),
            sweep_angle: sweep.to_radians(),
            x_rotation: 0.0,
        };
        path.move_to(self.center);
        path.line_to(arc.center + Vec2::from_angle(arc.start_angle) * self.radius);
        arc.append_iter(BEZ_TOLERANCE).for_each(|el| path.push(el));
        path.close_path();
        path
    }
}

/// Clamp a percentage into `[0, 100]`; NaN maps to 0.
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Sweeps of sectors A and B for `percentage`. They always add up to 360.
pub fn sweeps(percentage: f64) -> (f64, f64) {
    let sweep_a = FULL_CIRCLE * (clamp_percentage(percentage) / 100.0);
    (sweep_a, FULL_CIRCLE - sweep_a)
}

/// Sector paths for `percentage` using the stock geometry.
pub fn sectors(percentage: f64) -> SectorPair {
    PieGeometry::default().sectors(percentage)
}

#[cfg(test)]
#[path = "../../tests/unit/chart/sector.rs"]
mod tests;
