//! Distance-based shrink law for the anchored circle.

use gooey_animation::Lerp;
use gooey_graphics::{distance_between, Point};

/// Radius of the stick circle for the current drag distance.
///
/// Shrinks linearly from `base_radius` at distance zero down to
/// `min_radius` at `farthest_distance`; distances beyond that clamp to
/// `min_radius`. A non-positive `farthest_distance` is treated as the
/// minimum-distance case and yields `base_radius` rather than a NaN.
pub fn stick_radius(
    drag_center: Point,
    stick_center: Point,
    base_radius: f32,
    min_radius: f32,
    farthest_distance: f32,
) -> f32 {
    if farthest_distance <= 0.0 {
        return base_radius;
    }
    let distance = distance_between(drag_center, stick_center).min(farthest_distance);
    let fraction = distance / farthest_distance;
    base_radius.lerp(&min_radius, fraction)
}
