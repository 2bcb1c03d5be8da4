//! Animation timing for the goo widget
//!
//! Easing curves (including a port of Android's overshoot interpolator)
//! and a frame-time-driven tween. Nothing here owns a clock or a timer:
//! the host's scheduler feeds frame timestamps and the tween answers with
//! interpolated values, so any event loop can drive it.

mod easing;
mod tween;

pub use easing::*;
pub use tween::*;
