use std::time::Duration;

use celldom::transition::{EASE, EASE_OUT_BACK};
use celldom::{Easing, TransitionConfig};

// =============================================================================
// Easing functions
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    // EaseIn: t * t (quadratic)
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
}

#[test]
fn test_easing_ease_out() {
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_clamps_out_of_range() {
    assert_eq!(Easing::EaseInOut.apply(-0.5), 0.0);
    assert_eq!(Easing::EaseInOut.apply(1.5), 1.0);
}

// =============================================================================
// Cubic bezier
// =============================================================================

#[test]
fn test_cubic_bezier_endpoints() {
    assert_eq!(EASE.apply(0.0), 0.0);
    assert_eq!(EASE.apply(1.0), 1.0);
    assert_eq!(EASE_OUT_BACK.apply(0.0), 0.0);
    assert_eq!(EASE_OUT_BACK.apply(1.0), 1.0);
}

#[test]
fn test_cubic_bezier_linear_controls() {
    // Control points on the diagonal reproduce linear timing
    let linear = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!((linear.apply(t) - t).abs() < 1e-3, "t={t}");
    }
}

#[test]
fn test_cubic_bezier_monotonic_progress() {
    let mut last = 0.0f32;
    for i in 1..=20 {
        let t = i as f32 / 20.0;
        let v = EASE.apply(t);
        assert!(v >= last, "ease must not run backwards at t={t}");
        last = v;
    }
}

#[test]
fn test_ease_out_back_overshoots() {
    // The elastic curve passes above 1.0 before settling
    let peak = (1..20)
        .map(|i| EASE_OUT_BACK.apply(i as f32 / 20.0))
        .fold(0.0f32, f32::max);
    assert!(peak > 1.0, "expected overshoot, peak was {peak}");
}

#[test]
fn test_transition_config() {
    let config = TransitionConfig::new(Duration::from_millis(240), EASE);
    assert_eq!(config.duration, Duration::from_millis(240));
    assert_eq!(config.easing, EASE);
}
