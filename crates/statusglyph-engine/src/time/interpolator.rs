use std::f32::consts::PI;

/// Time interpolator mapping elapsed fraction `[0, 1]` to eased fraction.
///
/// All variants are monotonic and map `0 → 0`, `1 → 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Interpolator {
    Linear,
    /// Cosine ease in and out; the usual animator default.
    AccelerateDecelerate,
    /// Material "fast out, slow in": cubic bezier (0.4, 0, 0.2, 1).
    FastOutSlowIn,
    /// Material "linear out, slow in": cubic bezier (0, 0, 0.2, 1).
    LinearOutSlowIn,
    /// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Interpolator {
    pub fn interpolate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Interpolator::Linear => t,
            Interpolator::AccelerateDecelerate => ((t + 1.0) * PI).cos() * 0.5 + 0.5,
            Interpolator::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Interpolator::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Interpolator::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_axis_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Newton first, bisection when the slope flattens out.
    let mut s = t;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bezier_axis(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Interpolator; 5] = [
        Interpolator::Linear,
        Interpolator::AccelerateDecelerate,
        Interpolator::FastOutSlowIn,
        Interpolator::LinearOutSlowIn,
        Interpolator::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for i in ALL {
            assert!(i.interpolate(0.0).abs() < 1e-4, "{i:?}");
            assert!((i.interpolate(1.0) - 1.0).abs() < 1e-4, "{i:?}");
        }
    }

    #[test]
    fn every_interpolator_is_monotonic() {
        for i in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = i.interpolate(step as f32 / 100.0);
                assert!(v + 1e-4 >= prev, "{i:?} at {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn fast_out_slow_in_leads_linear_at_midpoint() {
        assert!(Interpolator::FastOutSlowIn.interpolate(0.5) > 0.5);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Interpolator::Linear.interpolate(-2.0), 0.0);
        assert_eq!(Interpolator::Linear.interpolate(7.0), 1.0);
    }
}
