pub mod animator;
pub mod interpolation;

// Re-export commonly used types for convenience
pub use animator::{Animation, Frames, ViewportAnimator};
pub use interpolation::{Interpolatable, Interpolation};
