/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out, `1 - (1 - t)^3`.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` timing function.
    ///
    /// `x1`/`x2` must lie in `[0, 1]`; `y1`/`y2` may overshoot.
    CubicBezier {
        /// First control point X.
        x1: f64,
        /// First control point Y.
        y1: f64,
        /// Second control point X.
        x2: f64,
        /// Second control point Y.
        y2: f64,
    },
}

impl Ease {
    /// Fast-in, slight-overshoot curve used for item, chart and sector transitions.
    pub const SNAP: Self = Self::CubicBezier {
        x1: 0.0,
        y1: 0.92,
        x2: 0.81,
        y2: 1.02,
    };

    /// Back-out curve used for the chart opacity transition.
    pub const BACK_OUT: Self = Self::CubicBezier {
        x1: 0.175,
        y1: 0.885,
        x2: 0.32,
        y2: 1.275,
    };

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// The input is clamped; the output of a bezier curve may leave `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_param(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                bezier_1d(s, y1, y2)
            }
        }
    }
}

fn bezier_1d(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_1d_deriv(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find `s` with `x(s) == x`. With control X values in `[0, 1]`, `x(s)` is monotonic.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const TOL: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_1d(s, x1, x2) - x;
        if err.abs() < TOL && (0.0..=1.0).contains(&s) {
            return s;
        }
        let d = bezier_1d_deriv(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    // Newton stalled (flat tangent) or left the interval: bisect.
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    s = x;
    for _ in 0..64 {
        let v = bezier_1d(s, x1, x2);
        if (v - x).abs() < TOL {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
