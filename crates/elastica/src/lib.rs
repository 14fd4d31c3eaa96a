#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]

//! # Elastica
//!
//! Motion tools for interactive 2D animation.
//!
//! Elastica provides:
//! - **Spring**: a damped harmonic oscillator with precomputed coefficients
//!   for cheap per-frame updates
//! - **Easing**: fixed-duration easing curves and a small progress timer
//! - **Point2 / Vec2**: the 2D geometry the animation layer needs
//!
//! ## Spring Example
//!
//! ```rust
//! use elastica::{fps, Motion, Spring};
//!
//! // A snappy, slightly bouncy spring (half-critically damped)
//! let spring = Spring::with_response(fps(60), 0.3, 0.5);
//!
//! let mut motion = Motion::at_rest(0.0);
//! let target = 100.0;
//!
//! // Simulate for 2 seconds (120 frames at 60 FPS)
//! for _ in 0..120 {
//!     motion = spring.update(motion, target);
//! }
//!
//! assert!((motion.position - target).abs() < 1.0);
//! ```
//!
//! ## Easing Example
//!
//! ```rust
//! use elastica::easing::{ease_out, Timed};
//!
//! let mut fade = Timed::new(0.5);
//! let mut value = 1.0;
//! while !fade.is_done() {
//!     value = 1.0 - ease_out(fade.advance(1.0 / 60.0));
//! }
//! assert_eq!(value, 0.0);
//! ```
//!
//! ## Attribution
//!
//! The spring integrator uses Ryan Juckett's closed-form damped harmonic
//! motion: <https://www.ryanjuckett.com/damped-springs/>

pub mod easing;
mod spring;
mod vec2;

pub use spring::{Motion, Spring, fps};
pub use vec2::{Point2, Vec2};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::easing::{Timed, ease_in, ease_in_out, ease_out};
    pub use crate::spring::{Motion, Spring, fps};
    pub use crate::vec2::{Point2, Vec2};
}
