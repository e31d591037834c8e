//! Tick-driven viewport transitions for the map card.
//!
//! An [`Animation`] is a pure function of time; [`ViewportAnimator`] owns the
//! visible viewport and at most one animation in flight. Starting a new
//! animation supersedes the running one, continuing from whatever is on
//! screen. There is no cancel operation.

use crate::animation::interpolation::{Interpolatable, Interpolation};
use crate::core::viewport::Viewport;
use instant::Instant;
use std::time::Duration;

/// A linear transition between two viewports over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: Viewport,
    to: Viewport,
    duration: Duration,
    started_at: Instant,
}

impl Animation {
    pub fn new(from: Viewport, to: Viewport, duration: Duration, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
        }
    }

    pub fn origin(&self) -> Viewport {
        self.from
    }

    pub fn target(&self) -> Viewport {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Viewport visible at `now`
    pub fn sample(&self, now: Instant) -> Viewport {
        self.sample_elapsed(self.elapsed(now))
    }

    /// Viewport visible `elapsed` after the start. Once the duration is reached
    /// the exact target is returned, never an interpolated approximation of it.
    pub fn sample_elapsed(&self, elapsed: Duration) -> Viewport {
        if elapsed >= self.duration {
            return self.to;
        }
        self.from
            .lerp(&self.to, Interpolation::progress(elapsed, self.duration))
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// Progress through the transition at `now`, in [0, 1]
    pub fn progress(&self, now: Instant) -> f64 {
        Interpolation::progress(self.elapsed(now), self.duration)
    }

    /// Lazy frame sequence sampled every `frame_interval`, ending with the target
    pub fn frames(&self, frame_interval: Duration) -> Frames {
        Frames {
            animation: *self,
            frame_interval,
            step: 1,
            done: false,
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        if now <= self.started_at {
            Duration::ZERO
        } else {
            now - self.started_at
        }
    }
}

/// Frames of an [`Animation`], one per display refresh
#[derive(Debug, Clone)]
pub struct Frames {
    animation: Animation,
    frame_interval: Duration,
    step: u32,
    done: bool,
}

impl Iterator for Frames {
    type Item = Viewport;

    fn next(&mut self) -> Option<Viewport> {
        if self.done {
            return None;
        }
        let elapsed = if self.frame_interval.is_zero() {
            self.animation.duration
        } else {
            self.frame_interval.saturating_mul(self.step)
        };
        if elapsed >= self.animation.duration {
            self.done = true;
            return Some(self.animation.to);
        }
        self.step += 1;
        Some(self.animation.sample_elapsed(elapsed))
    }
}

/// Owns the visible viewport and the transition currently driving it
#[derive(Debug, Clone)]
pub struct ViewportAnimator {
    current: Viewport,
    active: Option<Animation>,
    duration: Duration,
    started: u64,
}

impl ViewportAnimator {
    pub fn new(initial: Viewport, duration: Duration) -> Self {
        Self {
            current: initial,
            active: None,
            duration,
            started: 0,
        }
    }

    /// Starts a transition from `from` to `to`, superseding any running one
    pub fn animate(&mut self, from: Viewport, to: Viewport, now: Instant) -> bool {
        self.active = None;
        self.current = from;
        self.animate_to(to, now)
    }

    /// Starts a transition from the visible viewport to `target`.
    ///
    /// Returns `false` when nothing new was started: the same target is already
    /// in flight, or the map already shows it.
    pub fn animate_to(&mut self, target: Viewport, now: Instant) -> bool {
        match self.active {
            Some(active) if active.target() == target => return false,
            None if self.current == target => return false,
            _ => {}
        }

        self.started += 1;
        if self.duration.is_zero() {
            self.active = None;
            self.current = target;
            return true;
        }

        if self.active.is_some() {
            log::debug!("superseding viewport transition in flight");
        }
        self.active = Some(Animation::new(self.current, target, self.duration, now));
        true
    }

    /// Samples the running transition at `now` and makes it the visible viewport
    pub fn tick(&mut self, now: Instant) -> Viewport {
        if let Some(active) = self.active {
            self.current = active.sample(now);
            if active.is_finished_at(now) {
                self.active = None;
            }
        }
        self.current
    }

    /// Moves the map without animating, dropping any running transition
    pub fn jump_to(&mut self, viewport: Viewport) {
        self.active = None;
        self.current = viewport;
    }

    /// The viewport last shown
    pub fn viewport(&self) -> Viewport {
        self.current
    }

    /// Where the map is headed: the running target, or the visible viewport
    pub fn target(&self) -> Viewport {
        self.active.map(|a| a.target()).unwrap_or(self.current)
    }

    pub fn active(&self) -> Option<&Animation> {
        self.active.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Number of transitions started so far
    pub fn transitions_started(&self) -> u64 {
        self.started
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for ViewportAnimator {
    fn default() -> Self {
        Self::new(
            Viewport::world(),
            Duration::from_millis(crate::core::constants::VIEWPORT_ANIMATION_MS),
        )
    }
}
