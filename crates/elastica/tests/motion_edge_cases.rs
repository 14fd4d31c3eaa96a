#![allow(clippy::doc_markdown)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]

//! Edge-case tests for the spring integrator: extreme parameters,
//! long-duration stability, and degenerate time steps.

use elastica::{Motion, Spring, fps};

// =============================================================================
// Extreme parameters
// =============================================================================

#[test]
fn spring_very_high_damping_ratio() {
    // ζ well over 100 must converge without NaN
    let s = Spring::new(fps(60), 10.0, 150.0);
    let next = s.update(Motion::at_rest(0.0), 1.0);
    assert!(next.position.is_finite());
    assert!(next.velocity.is_finite());
}

#[test]
fn spring_very_small_angular_frequency() {
    // Near-zero stiffness barely moves in one frame but stays finite
    let s = Spring::new(fps(60), 0.001, 1.0);
    let next = s.update(Motion::at_rest(0.0), 1.0);
    assert!(next.position.is_finite());
    assert!(next.position.abs() < 0.1);
}

#[test]
fn spring_large_displacement() {
    let s = Spring::new(fps(60), 20.0, 1.0);
    let next = s.update(Motion::at_rest(-1000.0), 1000.0);
    assert!(next.position.is_finite());
    assert!(next.velocity.is_finite());
}

#[test]
fn spring_opposing_velocity_still_converges() {
    let s = Spring::new(fps(60), 10.0, 1.0);
    let mut motion = Motion::new(0.0, -100.0);
    for _ in 0..600 {
        motion = s.update(motion, 1.0);
    }
    assert!(
        (motion.position - 1.0).abs() < 0.1,
        "pos={} should be near 1.0",
        motion.position
    );
}

#[test]
fn spring_zero_delta_time_is_identity() {
    // dt = 0 advances nothing for every damping class
    for zeta in [0.2, 1.0, 3.0] {
        let s = Spring::new(0.0, 10.0, zeta);
        let next = s.update(Motion::new(4.0, -2.0), 100.0);
        assert!((next.position - 4.0).abs() < 1e-9, "zeta={zeta}");
        assert!((next.velocity + 2.0).abs() < 1e-9, "zeta={zeta}");
    }
}

// =============================================================================
// Long-duration stability
// =============================================================================

#[test]
fn spring_stability_1000_seconds() {
    let s = Spring::new(fps(60), 15.0, 0.8);
    let mut motion = Motion::new(0.0, 50.0);
    // 60000 frames = 1000 seconds
    for _ in 0..60_000 {
        motion = s.update(motion, 5.0);
        assert!(motion.position.is_finite(), "position became non-finite");
        assert!(motion.velocity.is_finite(), "velocity became non-finite");
    }
    assert!(motion.is_settled(5.0, 0.01), "should settle at 5.0: {motion:?}");
}

#[test]
fn spring_settled_state_is_fixed_point() {
    // Once at the target with zero velocity, updates stay put
    let s = Spring::new(fps(60), 8.0, 0.7);
    let mut motion = Motion::at_rest(42.0);
    for _ in 0..10 {
        motion = s.update(motion, 42.0);
        assert!((motion.position - 42.0).abs() < 1e-9);
        assert!(motion.velocity.abs() < 1e-9);
    }
}
