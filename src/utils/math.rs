use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::utils::constants::FEET_PER_METER;

/// Nose direction in the body frame.
#[inline]
pub fn body_forward() -> Vector3<f64> {
    Vector3::z()
}

/// Canopy direction in the body frame.
#[inline]
pub fn body_up() -> Vector3<f64> {
    Vector3::y()
}

/// Builds the body-to-world rotation for a set of attitude angles.
///
/// Yaw turns about world up, a positive pitch raises the nose and roll banks
/// about the forward axis, applied in that order.
pub fn attitude_from_angles(pitch: f64, roll: f64, yaw: f64) -> UnitQuaternion<f64> {
    let yaw_rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw);
    let pitch_rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -pitch);
    let roll_rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll);

    yaw_rotation * pitch_rotation * roll_rotation
}

/// Recovers (pitch, roll) from a body-to-world rotation.
pub fn pitch_roll_from_attitude(attitude: &UnitQuaternion<f64>) -> (f64, f64) {
    let forward = attitude * body_forward();
    let up = attitude * body_up();
    let wing = attitude * Vector3::x();

    let pitch = forward.y.clamp(-1.0, 1.0).asin();
    let roll = wing.y.atan2(up.y);
    (pitch, roll)
}

/// Wraps any angle in degrees into [0, 360).
pub fn normalize_heading(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }

    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Compass heading in degrees of a world-space forward vector.
pub fn heading_from_forward(forward: &Vector3<f64>) -> f64 {
    normalize_heading(forward.z.atan2(forward.x).to_degrees())
}

/// Wraps an angle in radians into [-PI, PI).
pub fn wrap_angle(radians: f64) -> f64 {
    (radians + PI).rem_euclid(2.0 * PI) - PI
}

#[inline]
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}
