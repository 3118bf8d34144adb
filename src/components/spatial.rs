use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::Orientation;

/// Kinematic state of an aircraft in world space (y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Acceleration applied during the last step [m/s^2]
    pub acceleration: Vector3<f64>,

    /// Attitude (rotation from body to world frame)
    pub attitude: Orientation,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            attitude: Orientation::default(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component at a specific position and attitude
    pub fn at_position(position: Vector3<f64>, attitude: Orientation) -> Self {
        Self {
            position,
            attitude,
            ..Default::default()
        }
    }
}
