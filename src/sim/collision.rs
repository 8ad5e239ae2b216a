//! Collision tests for circular entities on a rectangular field
//!
//! All tests are instantaneous overlap checks performed after movement. There
//! is no swept/continuous detection: a fast body can pass through a thin
//! target between ticks. With the frame clamp a bullet and an enemy closing
//! head-on cover at most 40.5 units of closing distance per tick, against a
//! 36-unit overlap window, so only a head-on pass near the clamp limit can
//! slip through.

use glam::Vec2;

/// Whether two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Clamp a circle's center so the whole circle stays inside `[0, field]`
#[inline]
pub fn clamp_to_field(pos: Vec2, radius: f32, field: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, field.x - radius),
        pos.y.clamp(radius, field.y - radius),
    )
}

/// Whether a point lies more than `margin` outside the field on any axis
#[inline]
pub fn outside_field(pos: Vec2, field: Vec2, margin: f32) -> bool {
    pos.x < -margin || pos.x > field.x + margin || pos.y < -margin || pos.y > field.y + margin
}

/// Unit vector from `from` toward `to`, or zero when they coincide
#[inline]
pub fn pursuit_direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
