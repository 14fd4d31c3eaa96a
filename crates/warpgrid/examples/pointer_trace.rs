//! Drives the effect with a scripted press-drag-release and renders the
//! grid vertices as coarse ASCII frames, standing in for a real canvas
//! host.
//!
//! Run with: `cargo run --example pointer_trace`
//! Set `RUST_LOG=debug` to see the controller's state transitions.

use elastica::Point2;
use warpgrid::{GridError, PointerEvent, WarpGridEffect};

const SURFACE_W: f64 = 640.0;
const SURFACE_H: f64 = 480.0;
const CANVAS_W: usize = 64;
const CANVAS_H: usize = 24;

fn render(effect: &WarpGridEffect, label: &str) {
    let mut canvas = vec![vec![' '; CANVAS_W]; CANVAS_H];
    for segment in effect.segments() {
        for point in [segment.start, segment.end] {
            let col = (point.x / SURFACE_W * CANVAS_W as f64) as isize;
            let row = (point.y / SURFACE_H * CANVAS_H as f64) as isize;
            if (0..CANVAS_W as isize).contains(&col) && (0..CANVAS_H as isize).contains(&row) {
                canvas[row as usize][col as usize] = '+';
            }
        }
    }

    println!("-- {label} --");
    for line in canvas {
        println!("{}", line.into_iter().collect::<String>());
    }
    println!();
}

fn main() -> Result<(), GridError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut effect = WarpGridEffect::new(12, 16, SURFACE_W, SURFACE_H)?;
    render(&effect, "at rest");

    // Press in the left half and let the field build up
    effect.handle(PointerEvent::Down(Point2::new(160.0, 240.0)));
    for _ in 0..30 {
        effect.tick();
    }
    render(&effect, "held at (160, 240)");

    // Drag to the right half over half a second
    for frame in 0..30 {
        let x = 160.0 + (480.0 - 160.0) * f64::from(frame) / 29.0;
        effect.handle(PointerEvent::Move(Point2::new(x, 240.0)));
        effect.tick();
    }
    render(&effect, "dragged to (480, 240)");

    // Lift and tick until the spring-back settles
    effect.handle(PointerEvent::Up);
    let mut frames = 0;
    while !effect.is_settled() {
        effect.tick();
        frames += 1;
    }
    render(&effect, &format!("settled after {frames} frames"));

    Ok(())
}
