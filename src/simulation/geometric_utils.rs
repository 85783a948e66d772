//! Geometric utility functions for wrapping and speed limits.

use macroquad::math::Vec2;

/// Wraps a position vector around the canvas boundaries (toroidal topology).
///
/// # Arguments
///
/// * `v` - Mutable position vector to wrap
/// * `box_width` - Width of the canvas
/// * `box_height` - Height of the canvas
pub fn wrap_around_mut(v: &mut Vec2, box_width: f32, box_height: f32) {
    v.x = v.x.rem_euclid(box_width);
    v.y = v.y.rem_euclid(box_height);
    // rem_euclid rounds tiny negatives up to the bound itself
    if v.x >= box_width {
        v.x = 0.0;
    }
    if v.y >= box_height {
        v.y = 0.0;
    }
}

/// Scales `v` down so its length does not exceed `max`.
///
/// A non-positive `max` yields the zero vector.
pub fn clamp_length(v: Vec2, max: f32) -> Vec2 {
    if max <= 0.0 {
        return Vec2::ZERO;
    }
    let length = v.length();
    if length > max { v * (max / length) } else { v }
}
