//! The radial-falloff displacement field.

use elastica::{Point2, Vec2};

/// Radius around the anchor within which points are displaced, in surface
/// units. Outside this radius the field is exactly the identity.
pub const INFLUENCE_RADIUS: f64 = 200.0;

/// Displacement magnitude at the anchor itself, in surface units. Falls
/// off linearly to zero at [`INFLUENCE_RADIUS`].
pub const PEAK_FORCE: f64 = 30.0;

/// A pure displacement field centered on an anchor point.
///
/// Points within [`INFLUENCE_RADIUS`] of the anchor are pushed radially
/// away from it; the push is [`PEAK_FORCE`] at the anchor and fades
/// linearly to zero at the rim, so displacement is continuous approaching
/// the boundary from within. The cutoff at the rim itself is hard: the
/// field is identity at and beyond the radius.
///
/// `influence` scales the whole field in `[0, 1]`, letting the effect fade
/// in on touch and out on release without moving the anchor.
///
/// # Example
///
/// ```rust
/// use elastica::Point2;
/// use warpgrid::WarpField;
///
/// let field = WarpField::new(Point2::new(50.0, 50.0), 1.0);
///
/// // A corner 70.7 units away is pushed diagonally away from the anchor
/// let warped = field.warp(Point2::origin());
/// assert!(warped.x < 0.0 && warped.y < 0.0);
///
/// // Far points are untouched
/// let far = Point2::new(500.0, 500.0);
/// assert_eq!(field.warp(far), far);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpField {
    anchor: Point2,
    influence: f64,
}

impl WarpField {
    /// Creates a field centered at `anchor`. `influence` is clamped to
    /// `[0, 1]`; NaN is treated as zero.
    pub fn new(anchor: Point2, influence: f64) -> Self {
        let influence = if influence.is_nan() {
            0.0
        } else {
            influence.clamp(0.0, 1.0)
        };
        Self { anchor, influence }
    }

    /// The identity field: displaces nothing.
    pub fn identity() -> Self {
        Self {
            anchor: Point2::origin(),
            influence: 0.0,
        }
    }

    /// The field's center.
    #[inline]
    pub fn anchor(&self) -> Point2 {
        self.anchor
    }

    /// The field's strength multiplier in `[0, 1]`.
    #[inline]
    pub fn influence(&self) -> f64 {
        self.influence
    }

    /// Maps a rest-space point to its displaced position.
    ///
    /// Pure and O(1). Total over finite input: any numeric anomaly falls
    /// back to returning `point` unchanged, so the render loop can never
    /// see NaN.
    pub fn warp(&self, point: Point2) -> Point2 {
        if self.influence <= 0.0 || !self.anchor.is_finite() {
            return point;
        }

        let offset = point - self.anchor;
        let distance = offset.magnitude();

        // Hard cutoff at the rim. Displacement direction is undefined at
        // distance zero, so that degenerate case is identity too.
        if distance >= INFLUENCE_RADIUS || distance <= f64::EPSILON {
            return point;
        }

        let angle = offset.y.atan2(offset.x);
        let force = (INFLUENCE_RADIUS - distance) / INFLUENCE_RADIUS * PEAK_FORCE;
        let push = Vec2::new(angle.cos() * force, angle.sin() * force) * self.influence;

        if !push.is_finite() {
            return point;
        }
        point + push
    }
}

impl Default for WarpField {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_outside_radius() {
        let field = WarpField::new(Point2::origin(), 1.0);
        for p in [
            Point2::new(INFLUENCE_RADIUS, 0.0),
            Point2::new(0.0, -INFLUENCE_RADIUS),
            Point2::new(300.0, 400.0),
        ] {
            assert_eq!(field.warp(p), p);
        }
    }

    #[test]
    fn test_identity_at_anchor() {
        // Direction is undefined at distance zero; must be identity, not NaN
        let anchor = Point2::new(50.0, 50.0);
        let field = WarpField::new(anchor, 1.0);
        let warped = field.warp(anchor);
        assert_eq!(warped, anchor);
        assert!(warped.is_finite());
    }

    #[test]
    fn test_push_is_radially_outward() {
        let field = WarpField::new(Point2::new(50.0, 50.0), 1.0);
        let warped = field.warp(Point2::origin());

        // Corner at distance ~70.7: force = (200 - 70.71)/200 * 30 = 19.39,
        // pushed along the 225-degree diagonal, so about -13.7 on each axis.
        assert!((warped.x - -13.71).abs() < 0.05, "got {warped:?}");
        assert!((warped.y - -13.71).abs() < 0.05, "got {warped:?}");
    }

    #[test]
    fn test_displacement_decreases_with_distance() {
        let field = WarpField::new(Point2::origin(), 1.0);
        let mut prev = f64::INFINITY;
        for i in 1..200 {
            let p = Point2::new(f64::from(i), 0.0);
            let magnitude = (field.warp(p) - p).magnitude();
            assert!(
                magnitude < prev,
                "displacement not decreasing at distance {i}"
            );
            prev = magnitude;
        }
    }

    #[test]
    fn test_force_vanishes_at_rim() {
        // Approaching the rim from within, the push tends to zero, so the
        // hard cutoff produces no jump at the boundary itself.
        let field = WarpField::new(Point2::origin(), 1.0);
        let p = Point2::new(INFLUENCE_RADIUS - 1e-6, 0.0);
        let magnitude = (field.warp(p) - p).magnitude();
        assert!(magnitude < 1e-6, "residual push {magnitude} at the rim");
    }

    #[test]
    fn test_influence_scales_displacement() {
        let p = Point2::new(40.0, 0.0);
        let full = WarpField::new(Point2::origin(), 1.0);
        let half = WarpField::new(Point2::origin(), 0.5);
        let off = WarpField::new(Point2::origin(), 0.0);

        let full_push = (full.warp(p) - p).magnitude();
        let half_push = (half.warp(p) - p).magnitude();

        assert!((half_push - full_push / 2.0).abs() < 1e-9);
        assert_eq!(off.warp(p), p);
    }

    #[test]
    fn test_influence_clamped() {
        let p = Point2::new(40.0, 0.0);
        let over = WarpField::new(Point2::origin(), 3.0);
        let unit = WarpField::new(Point2::origin(), 1.0);
        assert_eq!(over.warp(p), unit.warp(p));

        let nan = WarpField::new(Point2::origin(), f64::NAN);
        assert_eq!(nan.warp(p), p);
    }

    #[test]
    fn test_non_finite_anchor_is_identity() {
        let field = WarpField::new(Point2::new(f64::NAN, 0.0), 1.0);
        let p = Point2::new(10.0, 10.0);
        assert_eq!(field.warp(p), p);
    }

    #[test]
    fn test_default_is_identity() {
        let p = Point2::new(1.0, 2.0);
        assert_eq!(WarpField::default().warp(p), p);
    }
}
