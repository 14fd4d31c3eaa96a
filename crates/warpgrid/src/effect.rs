//! The façade a host talks to: grid + controller behind one surface.

use elastica::fps;

use crate::controller::{AnimationController, PointerEvent};
use crate::grid::{GridError, GridSpec, Segment};

/// The complete effect: a rest-state grid plus the animated warp field
/// over it.
///
/// Per frame the host applies pending pointer events, calls
/// [`tick`](Self::tick), then pulls [`segments`](Self::segments) and
/// strokes each one in a fixed color and width. Calls happen on one
/// logical timeline; the effect never blocks and never spawns.
///
/// # Example
///
/// ```rust
/// use elastica::Point2;
/// use warpgrid::{PointerEvent, WarpGridEffect};
///
/// let mut effect = WarpGridEffect::new(1, 1, 100.0, 100.0)?;
/// assert_eq!(effect.segments().len(), 4);
///
/// effect.handle(PointerEvent::Down(Point2::new(50.0, 50.0)));
/// effect.tick();
/// # Ok::<(), warpgrid::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WarpGridEffect {
    grid: GridSpec,
    controller: AnimationController,
}

impl WarpGridEffect {
    /// Creates an effect with the given grid layout and surface size,
    /// ticking at 60 frames per second.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for a zero row/column count or invalid
    /// surface dimensions.
    pub fn new(rows: u32, cols: u32, width: f64, height: f64) -> Result<Self, GridError> {
        Self::with_delta_time(rows, cols, width, height, fps(60))
    }

    /// Creates an effect with the default 35x20 grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSurface`] for invalid dimensions.
    pub fn with_defaults(width: f64, height: f64) -> Result<Self, GridError> {
        let grid = GridSpec::with_size(width, height)?;
        Ok(Self::from_grid(grid, fps(60)))
    }

    /// Creates an effect advancing `delta_time` seconds per tick, for
    /// hosts not running at 60 FPS.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] as [`new`](Self::new) does.
    pub fn with_delta_time(
        rows: u32,
        cols: u32,
        width: f64,
        height: f64,
        delta_time: f64,
    ) -> Result<Self, GridError> {
        let grid = GridSpec::new(rows, cols, width, height)?;
        Ok(Self::from_grid(grid, delta_time))
    }

    fn from_grid(grid: GridSpec, delta_time: f64) -> Self {
        let mut controller = AnimationController::new(delta_time);
        controller.set_surface(grid.width(), grid.height());
        Self { grid, controller }
    }

    /// Applies one pointer event. Events are expected in arrival order,
    /// before the frame's [`tick`](Self::tick).
    pub fn handle(&mut self, event: PointerEvent) {
        self.controller.handle(event);
    }

    /// Replaces the surface dimensions, keeping the grid's row/column
    /// counts.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSurface`] and changes nothing if the
    /// dimensions are invalid.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), GridError> {
        self.grid.resize(width, height)?;
        self.controller.set_surface(width, height);
        Ok(())
    }

    /// Advances the animation by one time step.
    pub fn tick(&mut self) {
        self.controller.tick();
    }

    /// Whether the effect is at rest; ticking may pause until the next
    /// pointer event.
    pub fn is_settled(&self) -> bool {
        self.controller.is_settled()
    }

    /// The rest-state grid.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// The controller, for hosts that want phase or anchor introspection.
    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    /// Generates this frame's segments: one per grid edge, every endpoint
    /// passed through the current warp field.
    pub fn segments(&self) -> Vec<Segment> {
        let field = self.controller.field();
        self.grid.segments(|p| field.warp(p))
    }
}
