#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]

//! # Warpgrid
//!
//! An interactive grid of lines that deforms near a pointer and springs
//! back to rest when contact ends.
//!
//! The crate is deliberately backend-agnostic: a host (window toolkit, web
//! canvas, game engine) feeds in pointer events and a surface size, ticks
//! the effect once per display refresh, and strokes the line segments the
//! effect hands back. Nothing here draws, blocks, or spawns threads.
//!
//! ## Example
//!
//! ```rust
//! use warpgrid::{PointerEvent, WarpGridEffect};
//! use elastica::Point2;
//!
//! let mut effect = WarpGridEffect::with_defaults(800.0, 600.0)?;
//!
//! // Host delivers a touch, then ticks at its refresh rate.
//! effect.handle(PointerEvent::Down(Point2::new(400.0, 300.0)));
//! for _ in 0..30 {
//!     effect.tick();
//! }
//!
//! // Per frame: pull the warped segments and stroke them.
//! for segment in effect.segments() {
//!     let _ = (segment.start, segment.end);
//! }
//!
//! effect.handle(PointerEvent::Up);
//! while !effect.is_settled() {
//!     effect.tick();
//! }
//! # Ok::<(), warpgrid::GridError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`grid`]: the rest-state lattice ([`GridSpec`]) and segment
//!   generation
//! - [`warp`]: the pure radial-falloff displacement field ([`WarpField`])
//! - [`controller`]: the spring-driven anchor state machine
//!   ([`AnimationController`])
//! - [`effect`]: the façade a host talks to ([`WarpGridEffect`])

pub mod controller;
pub mod effect;
pub mod grid;
pub mod warp;

pub use controller::{AnimationController, Phase, PointerEvent};
pub use effect::WarpGridEffect;
pub use grid::{GridError, GridSpec, Segment};
pub use warp::WarpField;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::controller::{AnimationController, Phase, PointerEvent};
    pub use crate::effect::WarpGridEffect;
    pub use crate::grid::{GridError, GridSpec, Segment};
    pub use crate::warp::WarpField;
    pub use elastica::{Point2, Vec2};
}
