//! Pure planar geometry on `Vec2` points.
//!
//! Every function here is total. The two zero-length cases (`point_on_circle`
//! with `point == origin` and `constrain_distance` with `p1 == p2`) fall back
//! to the positive x-axis.

use glam::Vec2;

/// Angle of the ray from `p1` to `p2`, in `(-π, π]`.
///
/// ```
/// use chain_follow::math::{direction, Vec2};
///
/// let angle = direction(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
/// assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// ```
pub fn direction(p1: Vec2, p2: Vec2) -> f32 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Euclidean distance between two points.
pub fn magnitude(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// The point on the circle of radius `r` around `origin` that lies in the
/// direction of `point`.
///
/// `point` may sit inside, outside or on the circle. When it coincides with
/// `origin` the angle is `atan2(0, 0) == 0`, giving `origin + (r, 0)`.
pub fn point_on_circle(point: Vec2, origin: Vec2, r: f32) -> Vec2 {
    origin + Vec2::from_angle(direction(origin, point)) * r
}

/// Maps any angle onto `(-π, π]` via the unit circle.
pub fn normalize_angle(angle: f32) -> f32 {
    angle.sin().atan2(angle.cos())
}

/// Whether `angle` lies within `tolerance` radians of `reference`, on either side.
///
/// Both angles are taken modulo a full turn, and the comparison uses the
/// shortest arc between them, so a reference of π with a 10° tolerance accepts
/// -179°.
pub fn is_angle_within_tolerance(angle: f32, reference: f32, tolerance: f32) -> bool {
    let delta = normalize_angle(normalize_angle(angle) - normalize_angle(reference));
    delta >= -tolerance && delta <= tolerance
}

/// The point on the ray from `p1` towards `p2` that is exactly `distance` away from `p1`.
///
/// Coincident points have no direction to scale along; the result is then
/// offset along +x: `(p1.x + distance, p1.y)`.
pub fn constrain_distance(p1: Vec2, p2: Vec2, distance: f32) -> Vec2 {
    let delta = p2 - p1;
    let current = delta.length();

    if current == 0.0 {
        return Vec2::new(p1.x + distance, p1.y);
    }

    p1 + delta * (distance / current)
}
