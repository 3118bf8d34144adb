use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{attitude_from_angles, body_forward, body_up, pitch_roll_from_attitude};

/// How control angles are turned into an attitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationMode {
    /// Control angles are the absolute attitude of the airframe.
    #[default]
    Euler,
    /// Control angles are rotation rates composed onto the current attitude.
    Quaternion,
}

/// Attitude of the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Orientation {
    Euler { pitch: f64, roll: f64, yaw: f64 },
    Quaternion(UnitQuaternion<f64>),
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Euler {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
        }
    }
}

impl Orientation {
    pub fn new(mode: OrientationMode, pitch: f64, roll: f64, yaw: f64) -> Self {
        match mode {
            OrientationMode::Euler => Self::Euler { pitch, roll, yaw },
            OrientationMode::Quaternion => {
                Self::Quaternion(attitude_from_angles(pitch, roll, yaw))
            }
        }
    }

    /// Body-to-world rotation.
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        match *self {
            Self::Euler { pitch, roll, yaw } => attitude_from_angles(pitch, roll, yaw),
            Self::Quaternion(attitude) => attitude,
        }
    }

    /// Nose direction in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.rotation() * body_forward()
    }

    /// Lift direction in world space.
    pub fn up(&self) -> Vector3<f64> {
        self.rotation() * body_up()
    }

    /// Pitch and roll of the airframe relative to the horizon.
    pub fn pitch_roll(&self) -> (f64, f64) {
        match *self {
            Self::Euler { pitch, roll, .. } => (pitch, roll),
            Self::Quaternion(attitude) => pitch_roll_from_attitude(&attitude),
        }
    }

    /// Applies one step of control input.
    ///
    /// Euler attitudes take the angles as-is. Quaternion attitudes compose the
    /// angles scaled by `rate_scale` as a body-frame increment and are then
    /// renormalized so that repeated composition cannot drift off unit length.
    pub fn apply(&mut self, pitch: f64, roll: f64, yaw: f64, rate_scale: f64) {
        match self {
            Self::Euler {
                pitch: current_pitch,
                roll: current_roll,
                yaw: current_yaw,
            } => {
                *current_pitch = pitch;
                *current_roll = roll;
                *current_yaw = yaw;
            }
            Self::Quaternion(attitude) => {
                let increment =
                    attitude_from_angles(pitch * rate_scale, roll * rate_scale, yaw * rate_scale);
                let composed = *attitude * increment;
                *attitude = UnitQuaternion::from_quaternion(composed.into_inner().normalize());
            }
        }
    }
}
