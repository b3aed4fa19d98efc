//! Aiming geometry
//!
//! Direction and bearing helpers used by the enemy to home in on the player
//! and decide whether the player sits inside its firing cone. Degenerate
//! inputs (coincident points, zero vertical offset) yield `None`; callers
//! skip that tick's effect instead of failing.

use glam::Vec2;

/// Unit vector pointing from `from` to `to`, with `vertical_offset`
/// subtracted from the target's y-coordinate first.
///
/// Returns `None` when `from` and the adjusted target coincide.
pub fn direction_towards(from: Vec2, to: Vec2, vertical_offset: f32) -> Option<Vec2> {
    let target = Vec2::new(to.x, to.y - vertical_offset);
    let delta = target - from;
    let distance = delta.length();

    if distance == 0.0 || !distance.is_finite() {
        return None;
    }

    Some(delta / distance)
}

/// Bearing of `to` as seen from `from`, in degrees: `atan(dx / dy)`.
///
/// Zero means directly above or below. Returns `None` when both points
/// share a y-coordinate (the slope is undefined). The slope is evaluated in
/// `f64` so a bearing on the cone edge does not round across it.
pub fn bearing_angle_degrees(from: Vec2, to: Vec2) -> Option<f32> {
    let offset = from.as_dvec2() - to.as_dvec2();
    if offset.y == 0.0 {
        return None;
    }

    Some((offset.x / offset.y).atan().to_degrees() as f32)
}

/// Whether `angle_degrees` lies within ±`half_angle_degrees`
#[inline]
pub fn within_cone(angle_degrees: f32, half_angle_degrees: f32) -> bool {
    angle_degrees.abs() <= half_angle_degrees
}
