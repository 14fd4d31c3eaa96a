//! The spring-driven anchor state machine.
//!
//! Pointer events move the *target*; springs move the *anchor*. Two
//! independent tracks evolve per tick:
//!
//! - the anchor position chases the live pointer with a quick,
//!   slightly-bouncy spring while tracking;
//! - a scalar influence fades the whole field in (same spring, toward 1)
//!   and, on release, back out over a fixed ease-out.
//!
//! Splitting release onto its own influence track is what lets the grid
//! relax smoothly: the anchor freezes where the finger left it and the
//! field fades, instead of the displacement popping to identity the
//! instant contact ends.
//!
//! Single-threaded by construction: the host applies events in arrival
//! order, then ticks, then reads [`AnimationController::field`]; there is
//! no shared state beyond that.

use elastica::easing::{Timed, ease_out};
use elastica::{Motion, Point2, Spring, fps};
use tracing::{debug, warn};

use crate::warp::WarpField;

/// Response (oscillation period, seconds) of the tracking spring.
pub const TRACKING_RESPONSE: f64 = 0.3;

/// Damping fraction of the tracking spring. Under-damped: the grid
/// overshoots a little when the pointer stops, which reads as elasticity.
pub const TRACKING_DAMPING: f64 = 0.5;

/// Seconds for the influence fade-out after the pointer lifts.
pub const RELEASE_DURATION: f64 = 0.5;

/// Below this influence the effect counts as settled.
const SETTLE_TOLERANCE: f64 = 1e-3;

/// A pointer event from the host, in surface-local coordinates
/// (origin top-left, +x right, +y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Contact began at the given position.
    Down(Point2),
    /// Contact moved to the given position.
    Move(Point2),
    /// Contact ended.
    Up,
}

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No contact and no residual influence; ticking is optional.
    Idle,
    /// Anchor is chasing a live pointer.
    Tracking,
    /// Pointer lifted; influence is fading out.
    Releasing,
}

/// Owns the anchor state and advances it one fixed time step per tick.
///
/// The controller is the single writer of anchor state; a renderer reads a
/// [`WarpField`] snapshot once per frame via [`field`](Self::field).
///
/// # Example
///
/// ```rust
/// use elastica::Point2;
/// use warpgrid::{AnimationController, PointerEvent};
///
/// let mut controller = AnimationController::default();
/// controller.handle(PointerEvent::Down(Point2::new(100.0, 100.0)));
/// controller.tick();
/// let field = controller.field();
/// assert!(field.influence() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AnimationController {
    delta_time: f64,
    spring: Spring,
    phase: Phase,
    anchor_x: Motion,
    anchor_y: Motion,
    target: Option<Point2>,
    /// Engage-side influence track, spring-driven toward 1.
    influence: Motion,
    /// Release-side fade timer and the influence it started from.
    release: Timed,
    release_start: f64,
    surface_width: f64,
    surface_height: f64,
}

impl AnimationController {
    /// Creates a controller advancing `delta_time` seconds per tick.
    pub fn new(delta_time: f64) -> Self {
        Self {
            delta_time,
            spring: Spring::with_response(delta_time, TRACKING_RESPONSE, TRACKING_DAMPING),
            phase: Phase::Idle,
            anchor_x: Motion::at_rest(0.0),
            anchor_y: Motion::at_rest(0.0),
            target: None,
            influence: Motion::at_rest(0.0),
            release: Timed::new(0.0),
            release_start: 0.0,
            surface_width: f64::INFINITY,
            surface_height: f64::INFINITY,
        }
    }

    /// Tells the controller the surface extent so pointer coordinates can
    /// be clamped at ingestion.
    pub fn set_surface(&mut self, width: f64, height: f64) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// Applies one pointer event.
    ///
    /// Non-finite coordinates are rejected here, at the boundary, so the
    /// integrator only ever sees clean input; out-of-surface coordinates
    /// are clamped to the surface rectangle.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(position) | PointerEvent::Move(position) => {
                let Some(position) = self.sanitize(position) else {
                    return;
                };
                self.track(position);
            }
            PointerEvent::Up => self.release(),
        }
    }

    /// Advances the anchor and influence tracks by one time step.
    ///
    /// Call at display refresh rate, after applying any pending events and
    /// before reading [`field`](Self::field).
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Idle => {}
            Phase::Tracking => {
                if let Some(target) = self.target {
                    self.anchor_x = self.spring.update(self.anchor_x, target.x);
                    self.anchor_y = self.spring.update(self.anchor_y, target.y);
                }
                self.influence = self.spring.update(self.influence, 1.0);
            }
            Phase::Releasing => {
                // The anchor holds still; only the field strength decays.
                let progress = self.release.advance(self.delta_time);
                self.influence = Motion::at_rest(self.release_start * (1.0 - ease_out(progress)));
                if self.release.is_done() || self.influence.position <= SETTLE_TOLERANCE {
                    self.settle();
                }
            }
        }
    }

    /// Snapshot of the displacement field for the current frame.
    pub fn field(&self) -> WarpField {
        WarpField::new(self.anchor(), self.influence())
    }

    /// Current anchor position.
    #[inline]
    pub fn anchor(&self) -> Point2 {
        Point2::new(self.anchor_x.position, self.anchor_y.position)
    }

    /// Current field strength in `[0, 1]`. The engage spring may
    /// transiently overshoot 1; the clamp happens here, where the value
    /// leaves the integrator.
    #[inline]
    pub fn influence(&self) -> f64 {
        self.influence.position.clamp(0.0, 1.0)
    }

    /// Current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the effect is at rest. A host may stop ticking while this
    /// holds; the next pointer event wakes it.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Idle
    }

    fn track(&mut self, position: Point2) {
        match self.phase {
            Phase::Idle => {
                // First contact: there is no previous anchor to animate
                // from, so the anchor appears at the touch and the field
                // fades in from zero.
                debug!(x = position.x, y = position.y, "tracking started");
                self.anchor_x = Motion::at_rest(position.x);
                self.anchor_y = Motion::at_rest(position.y);
                self.influence = Motion::at_rest(0.0);
            }
            Phase::Releasing => {
                // Contact resumed mid-fade: pick the influence up where
                // the fade left it and spring back toward full strength.
                debug!("tracking resumed during release");
                self.influence = Motion::at_rest(self.influence());
            }
            Phase::Tracking => {
                // Moves retarget only; anchor position and velocity carry
                // over so the motion stays continuous.
            }
        }
        self.phase = Phase::Tracking;
        self.target = Some(position);
    }

    fn release(&mut self) {
        if self.phase != Phase::Tracking {
            return;
        }
        debug!(influence = self.influence(), "released");
        self.phase = Phase::Releasing;
        self.target = None;
        // Holding position during the fade; drop any residual velocity.
        self.anchor_x.velocity = 0.0;
        self.anchor_y.velocity = 0.0;
        self.release = Timed::new(RELEASE_DURATION);
        self.release_start = self.influence();
    }

    fn settle(&mut self) {
        debug!("settled");
        self.phase = Phase::Idle;
        self.target = None;
        self.influence = Motion::at_rest(0.0);
        self.anchor_x.velocity = 0.0;
        self.anchor_y.velocity = 0.0;
    }

    fn sanitize(&self, position: Point2) -> Option<Point2> {
        if !position.is_finite() {
            warn!(x = position.x, y = position.y, "rejected non-finite pointer position");
            return None;
        }
        Some(position.clamped_to(self.surface_width, self.surface_height))
    }
}

impl Default for AnimationController {
    /// A controller ticking at 60 frames per second.
    fn default() -> Self {
        Self::new(fps(60))
    }
}
