//! Interaction engine for the sticky "goo" dismiss effect
//!
//! A draggable circle is joined to an anchored circle by an elastic band
//! that thins out as the pointer pulls away and snaps past a distance
//! threshold: the classic dismissible notification bubble.
//!
//! [`GooEngine`] consumes pointer and size events, runs the
//! range/snap/disappear/reset state machine and produces a per-frame
//! [`GooScene`] of geometric primitives for any renderer. Hosts learn
//! about dismissal and returns through the two registered callbacks and
//! drive the snap-back animation by forwarding frame timestamps.
//!
//! The engine is single-threaded by design: all mutation happens on
//! whichever thread dispatches input and frame events.

mod config;
mod engine;
mod input;
mod radius;
mod scene;

pub use config::*;
pub use engine::*;
pub use input::*;
pub use radius::*;
pub use scene::*;
