use crate::core::{geo::Point, viewport::Viewport};

/// Interpolation trait for values that can be smoothly transitioned
pub trait Interpolatable {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolatable for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Interpolation::linear(*self, *other, t)
    }
}

impl Interpolatable for Point {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Point::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }
}

impl Interpolatable for Viewport {
    /// Center and zoom move independently
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Viewport::new(
            self.center.lerp(&other.center, t),
            self.zoom().lerp(&other.zoom(), t),
        )
    }
}

/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }

    /// Normalized progress of `elapsed` through `duration`, clamped to [0, 1].
    /// A zero duration is complete immediately.
    pub fn progress(elapsed: std::time::Duration, duration: std::time::Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}
