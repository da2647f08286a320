// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing functions (easing curves) for timeline tracks.
//!
//! The named curves are the cubic Béziers platform compositors use for their
//! media timing functions, so a host that hands a track to its native
//! animator and a host that samples it in software see the same motion.

/// Controls the rate of change across one track of a timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// Constant speed.
    Linear,
    /// Starts fast, ends slow. Equivalent to `CubicBezier(0.0, 0.0, 0.58, 1.0)`.
    EaseOut,
    /// CSS-style cubic Bézier `(x1, y1, x2, y2)` with `x1`, `x2` in `[0, 1]`.
    CubicBezier(f64, f64, f64, f64),
}

impl TimingFunction {
    /// Control points for [`EaseOut`](Self::EaseOut).
    pub const EASE_OUT_POINTS: (f64, f64, f64, f64) = (0.0, 0.0, 0.58, 1.0);

    /// Evaluates the curve at progress `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::EaseOut => {
                let (x1, y1, x2, y2) = Self::EASE_OUT_POINTS;
                cubic_bezier(t, x1, y1, x2, y2)
            }
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Solves the curve's x(s) = `x` for `s` and returns y(s).
///
/// Newton-Raphson first; bisection when the slope flattens out (curves with
/// `x1 == 0` have zero slope at the start).
fn cubic_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    const EPSILON: f64 = 1e-9;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return bezier_coord(s, y1, y2);
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    for _ in 0..64 {
        let v = bezier_coord(s, x1, x2);
        if (v - x).abs() < EPSILON {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_coord(s, y1, y2)
}

/// One coordinate of a cubic Bézier with endpoints 0 and 1.
fn bezier_coord(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}
