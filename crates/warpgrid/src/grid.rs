//! The rest-state lattice and per-frame segment generation.

use elastica::Point2;
use thiserror::Error;

/// Default number of rows when the host does not choose one.
pub const DEFAULT_ROWS: u32 = 35;

/// Default number of columns when the host does not choose one.
pub const DEFAULT_COLS: u32 = 20;

/// Errors from grid construction and resizing.
///
/// These are fail-fast configuration errors: the render path itself is
/// total and never returns an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// `rows` must be at least 1.
    #[error("grid needs at least one row")]
    InvalidRows,
    /// `cols` must be at least 1.
    #[error("grid needs at least one column")]
    InvalidCols,
    /// Surface dimensions must be finite and positive.
    #[error("surface dimensions must be finite and positive")]
    InvalidSurface,
}

/// A line segment between two screen-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment start point.
    pub start: Point2,
    /// Segment end point.
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[inline]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// The rest-state grid: row/column counts plus the surface they span.
///
/// Row and column counts are fixed at construction; only the surface
/// dimensions change (on host resize). Spacing is derived, never stored,
/// so the layout can never drift out of sync with the surface.
///
/// # Example
///
/// ```rust
/// use warpgrid::GridSpec;
///
/// let grid = GridSpec::new(35, 20, 390.0, 844.0)?;
/// assert_eq!(grid.spacing_x(), 390.0 / 20.0);
/// # Ok::<(), warpgrid::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    rows: u32,
    cols: u32,
    width: f64,
    height: f64,
}

impl GridSpec {
    /// Creates a grid spec, validating all parameters up front.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if `rows` or `cols` is zero, or if either
    /// surface dimension is non-finite or not positive.
    pub fn new(rows: u32, cols: u32, width: f64, height: f64) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::InvalidRows);
        }
        if cols == 0 {
            return Err(GridError::InvalidCols);
        }
        check_surface(width, height)?;
        Ok(Self {
            rows,
            cols,
            width,
            height,
        })
    }

    /// Creates a grid with the default 35x20 layout.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSurface`] for non-finite or
    /// non-positive dimensions.
    pub fn with_size(width: f64, height: f64) -> Result<Self, GridError> {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, width, height)
    }

    /// Replaces the surface dimensions, keeping row/column counts.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSurface`] and leaves the grid unchanged
    /// if the new dimensions are invalid.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), GridError> {
        check_surface(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Surface width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Horizontal distance between adjacent columns.
    ///
    /// Safe: `cols >= 1` is a construction invariant.
    #[inline]
    pub fn spacing_x(&self) -> f64 {
        self.width / f64::from(self.cols)
    }

    /// Vertical distance between adjacent rows.
    #[inline]
    pub fn spacing_y(&self) -> f64 {
        self.height / f64::from(self.rows)
    }

    /// Rest position of the lattice vertex at `(col, row)`.
    ///
    /// Valid for `col in 0..=cols`, `row in 0..=rows` (a grid of R rows
    /// has R+1 lines of vertices).
    #[inline]
    pub fn vertex(&self, col: u32, row: u32) -> Point2 {
        Point2::new(
            f64::from(col) * self.spacing_x(),
            f64::from(row) * self.spacing_y(),
        )
    }

    /// Total number of edges in the lattice:
    /// `rows * (cols + 1)` vertical plus `cols * (rows + 1)` horizontal.
    #[inline]
    pub fn segment_count(&self) -> usize {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        rows * (cols + 1) + cols * (rows + 1)
    }

    /// Generates one segment per grid edge, each endpoint mapped through
    /// `warp`.
    ///
    /// The walk is row-major over vertices; at each vertex the edge to its
    /// right neighbor is emitted first (when one exists), then the edge to
    /// the neighbor below. The ordering is stable so hosts may rely on it.
    /// Deterministic: identical inputs produce identical sequences.
    pub fn segments(&self, warp: impl Fn(Point2) -> Point2) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.segment_count());
        for row in 0..=self.rows {
            for col in 0..=self.cols {
                let here = warp(self.vertex(col, row));

                if col < self.cols {
                    let right = warp(self.vertex(col + 1, row));
                    out.push(Segment::new(here, right));
                }

                if row < self.rows {
                    let below = warp(self.vertex(col, row + 1));
                    out.push(Segment::new(here, below));
                }
            }
        }
        out
    }
}

fn check_surface(width: f64, height: f64) -> Result<(), GridError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidSurface)
    }
}
