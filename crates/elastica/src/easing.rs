//! Fixed-duration easing curves and a small progress timer.
//!
//! Springs handle open-ended motion; easing handles the "take exactly this
//! long" cases, like fading an effect out over half a second. Curves map a
//! progress fraction in `[0, 1]` to an eased fraction in `[0, 1]`; input
//! outside the range is clamped.

/// Cubic ease-out: fast start, gentle landing.
///
/// # Example
///
/// ```rust
/// use elastica::easing::ease_out;
///
/// assert_eq!(ease_out(0.0), 0.0);
/// assert_eq!(ease_out(1.0), 1.0);
/// assert!(ease_out(0.5) > 0.5);
/// ```
#[inline]
pub fn ease_out(progress: f64) -> f64 {
    let p = clamp_unit(progress);
    let q = 1.0 - p;
    1.0 - q * q * q
}

/// Cubic ease-in: gentle start, fast finish.
#[inline]
pub fn ease_in(progress: f64) -> f64 {
    let p = clamp_unit(progress);
    p * p * p
}

/// Cubic ease-in-out: gentle at both ends.
#[inline]
pub fn ease_in_out(progress: f64) -> f64 {
    let p = clamp_unit(progress);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        let q = -2.0 * p + 2.0;
        1.0 - q * q * q / 2.0
    }
}

#[inline]
fn clamp_unit(p: f64) -> f64 {
    // NaN compares false everywhere; treat it as completed rather than
    // letting it poison downstream interpolation.
    if p.is_nan() { 1.0 } else { p.clamp(0.0, 1.0) }
}

/// Tracks elapsed time against a fixed duration, yielding progress in
/// `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use elastica::easing::Timed;
///
/// let mut timer = Timed::new(0.5);
/// assert_eq!(timer.advance(0.25), 0.5);
/// assert_eq!(timer.advance(0.25), 1.0);
/// assert!(timer.is_done());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed {
    duration: f64,
    elapsed: f64,
}

impl Timed {
    /// Creates a timer for `duration` seconds. A non-positive duration is
    /// already done.
    #[inline]
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Advances by `delta_time` seconds and returns the new progress,
    /// saturating at 1.
    #[inline]
    pub fn advance(&mut self, delta_time: f64) -> f64 {
        self.elapsed += delta_time.max(0.0);
        self.progress()
    }

    /// Current progress in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Whether the full duration has elapsed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }
}
