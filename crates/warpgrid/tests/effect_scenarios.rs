#![allow(clippy::doc_markdown)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]

//! End-to-end scenarios: a host-shaped event stream driven through the
//! full effect, checked against hand-computed geometry.

use elastica::Point2;
use warpgrid::controller::RELEASE_DURATION;
use warpgrid::{PointerEvent, Segment, WarpField, WarpGridEffect};

fn tick_seconds(effect: &mut WarpGridEffect, seconds: f64) {
    let frames = (seconds * 60.0).round() as usize;
    for _ in 0..frames {
        effect.tick();
    }
}

// =============================================================================
// Rest-state geometry
// =============================================================================

#[test]
fn unit_grid_renders_four_square_edges() {
    let effect = WarpGridEffect::new(1, 1, 100.0, 100.0).unwrap();
    let segments = effect.segments();

    assert_eq!(segments.len(), 4);
    assert_eq!(
        segments,
        vec![
            Segment::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)),
            Segment::new(Point2::new(0.0, 0.0), Point2::new(0.0, 100.0)),
            Segment::new(Point2::new(100.0, 0.0), Point2::new(100.0, 100.0)),
            Segment::new(Point2::new(0.0, 100.0), Point2::new(100.0, 100.0)),
        ]
    );
}

#[test]
fn segment_generation_is_deterministic() {
    let mut effect = WarpGridEffect::new(6, 8, 320.0, 240.0).unwrap();
    effect.handle(PointerEvent::Down(Point2::new(160.0, 120.0)));
    tick_seconds(&mut effect, 0.25);

    assert_eq!(effect.segments(), effect.segments());
}

// =============================================================================
// Warped geometry against hand-computed values
// =============================================================================

#[test]
fn centered_anchor_displaces_unit_grid_corner() {
    // A full-strength field at (50, 50): the corner at the origin sits
    // 70.7 units away, force = (200 - 70.71) / 200 * 30 = 19.39, pushed
    // along the 225-degree diagonal: about (-13.7, -13.7).
    let field = WarpField::new(Point2::new(50.0, 50.0), 1.0);
    let grid = WarpGridEffect::new(1, 1, 100.0, 100.0).unwrap();
    let segments = grid.grid().segments(|p| field.warp(p));

    let corner = segments[0].start;
    assert!((corner.x - -13.71).abs() < 0.05, "corner {corner:?}");
    assert!((corner.y - -13.71).abs() < 0.05, "corner {corner:?}");

    // Every other corner is equidistant and pushed symmetrically outward
    let far = segments[2].end; // (100, 100)
    assert!((far.x - 113.71).abs() < 0.05, "far corner {far:?}");
    assert!((far.y - 113.71).abs() < 0.05, "far corner {far:?}");
}

#[test]
fn held_press_warps_nearby_vertices_only() {
    let mut effect = WarpGridEffect::with_defaults(800.0, 600.0).unwrap();
    let rest = effect.segments();

    effect.handle(PointerEvent::Down(Point2::new(400.0, 300.0)));
    tick_seconds(&mut effect, 1.0);
    let warped = effect.segments();

    let mut moved = 0usize;
    for (r, w) in rest.iter().zip(&warped) {
        let near = r.start.distance_to(Point2::new(400.0, 300.0)) < 200.0;
        if near && r.start != Point2::new(400.0, 300.0) {
            // close enough that a full-strength field must have moved it
            if r.start.distance_to(Point2::new(400.0, 300.0)) < 150.0 {
                assert_ne!(r.start, w.start, "vertex inside radius did not move");
            }
            moved += 1;
        }
        if r.start.distance_to(Point2::new(400.0, 300.0)) >= 200.0 {
            assert_eq!(r.start, w.start, "vertex outside radius moved");
        }
    }
    assert!(moved > 0, "no vertices within the influence radius");
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[test]
fn release_returns_grid_to_rest() {
    let mut effect = WarpGridEffect::with_defaults(800.0, 600.0).unwrap();
    let rest = effect.segments();

    effect.handle(PointerEvent::Down(Point2::new(123.0, 456.0)));
    tick_seconds(&mut effect, 0.5);
    effect.handle(PointerEvent::Move(Point2::new(300.0, 200.0)));
    tick_seconds(&mut effect, 0.5);
    assert_ne!(effect.segments(), rest, "grid should be deformed mid-press");

    effect.handle(PointerEvent::Up);
    tick_seconds(&mut effect, RELEASE_DURATION + 0.1);

    assert!(effect.is_settled());
    assert_eq!(
        effect.segments(),
        rest,
        "after the fade, every segment is back at rest"
    );
}

#[test]
fn rapid_tap_settles_cleanly() {
    // Down and up on consecutive frames: influence barely rises, but the
    // state machine still walks Tracking -> Releasing -> Idle.
    let mut effect = WarpGridEffect::with_defaults(400.0, 400.0).unwrap();
    effect.handle(PointerEvent::Down(Point2::new(200.0, 200.0)));
    effect.tick();
    effect.handle(PointerEvent::Up);
    tick_seconds(&mut effect, RELEASE_DURATION + 0.1);

    assert!(effect.is_settled());
    let rest = effect.grid().segments(|p| p);
    assert_eq!(effect.segments(), rest);
}

#[test]
fn settled_effect_can_stop_ticking() {
    let mut effect = WarpGridEffect::with_defaults(400.0, 400.0).unwrap();
    assert!(effect.is_settled());

    effect.handle(PointerEvent::Down(Point2::new(10.0, 10.0)));
    assert!(!effect.is_settled());

    effect.handle(PointerEvent::Up);
    let mut frames = 0;
    while !effect.is_settled() {
        effect.tick();
        frames += 1;
        assert!(frames <= 60, "failed to settle within a second");
    }

    // Ticking a settled effect is a no-op
    let rest = effect.segments();
    effect.tick();
    assert_eq!(effect.segments(), rest);
}
