//! Widget tuning constants.
//!
//! Values are in logical pixels and milliseconds. They are fixed at
//! construction; the one layout-derived quantity (the farthest drag
//! distance, one third of the container width) lives on the engine and is
//! recomputed on every size event.

use gooey_animation::{AnimationSpec, Easing};

/// Radius of the circle tracking the pointer.
pub const DRAG_RADIUS: f32 = 16.0;

/// Base radius of the anchored circle, before the shrink law applies.
pub const STICK_RADIUS: f32 = 12.0;

/// Fraction of the base stick radius left once the drag circle reaches
/// the farthest distance.
pub const MIN_STICK_RADIUS_FRACTION: f32 = 0.25;

/// Length of the snap-back return animation.
pub const RESET_DURATION_MILLIS: u64 = 500;

/// Overshoot tension of the snap-back return; higher values fly further
/// past the anchor before settling.
pub const OVERSHOOT_TENSION: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GooConfig {
    pub drag_radius: f32,
    pub stick_radius: f32,
    pub min_stick_radius_fraction: f32,
    pub reset_duration_millis: u64,
    pub overshoot_tension: f32,
}

impl GooConfig {
    /// Smallest radius the shrink law may assign to the stick circle.
    pub fn min_stick_radius(&self) -> f32 {
        self.stick_radius * self.min_stick_radius_fraction
    }

    /// Spec of the snap-back return animation.
    pub fn reset_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(
            self.reset_duration_millis,
            Easing::Overshoot {
                tension: self.overshoot_tension,
            },
        )
    }
}

impl Default for GooConfig {
    fn default() -> Self {
        Self {
            drag_radius: DRAG_RADIUS,
            stick_radius: STICK_RADIUS,
            min_stick_radius_fraction: MIN_STICK_RADIUS_FRACTION,
            reset_duration_millis: RESET_DURATION_MILLIS,
            overshoot_tension: OVERSHOOT_TENSION,
        }
    }
}
