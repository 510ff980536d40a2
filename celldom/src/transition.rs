use std::time::Duration;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic bezier with endpoints (0,0) and (1,1) and the given control
    /// points, as in CSS timing functions. The x control coordinates must lie
    /// in [0,1] so progress stays a function of time.
    CubicBezier(f32, f32, f32, f32),
}

/// The CSS `ease` curve.
pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);

/// Overshooting curve for drag previews (settles past the target, then back).
pub const EASE_OUT_BACK: Easing = Easing::CubicBezier(0.34, 1.56, 0.64, 1.0);

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Evaluate a CSS-style cubic bezier at time `t`.
///
/// Solves the x spline for the parameter by bisection (x is monotonic for
/// x control points in [0,1]), then evaluates the y spline there.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let sample = |c1: f32, c2: f32, s: f32| -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * c1 + 3.0 * inv * s * s * c2 + s * s * s
    };

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut s = t;
    for _ in 0..32 {
        let x = sample(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }

    sample(y1, y2, s)
}
