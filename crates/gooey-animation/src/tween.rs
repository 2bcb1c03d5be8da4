//! Frame-time-driven tween.
//!
//! A [`Tween`] holds no clock and spawns no timer. The host's scheduler
//! (frame callback, game loop, async task) feeds it absolute frame
//! timestamps; the first observed timestamp is latched as the start time.
//! Cancellation is dropping the value.

use gooey_graphics::{point_by_fraction, Point};

use crate::AnimationSpec;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        point_by_fraction(*self, *target, fraction)
    }
}

/// A one-shot interpolation from `start` to `target` over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp + Clone> {
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            start,
            target,
            spec,
            start_time_nanos: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// The interpolated value for the given frame time.
    ///
    /// The first call latches `frame_time_nanos` as the start of the
    /// animation. Once the duration has elapsed the exact `target` value
    /// is returned, never an eased approximation of it.
    pub fn value_at(&mut self, frame_time_nanos: u64) -> T {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let duration = self.duration_nanos();
        let linear_progress = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
        if linear_progress >= 1.0 {
            return self.target.clone();
        }
        let progress = self.spec.easing.transform(linear_progress);
        self.start.lerp(&self.target, progress)
    }

    /// Whether the duration has elapsed relative to the latched start.
    ///
    /// Always `false` before the first `value_at` call.
    pub fn is_finished(&self, frame_time_nanos: u64) -> bool {
        match self.start_time_nanos {
            Some(start_time) => frame_time_nanos.saturating_sub(start_time) >= self.duration_nanos(),
            None => false,
        }
    }

    fn duration_nanos(&self) -> u64 {
        (self.spec.duration_millis * 1_000_000).max(1)
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
