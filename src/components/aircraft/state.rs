use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{OrientationMode, SpatialComponent};
use crate::utils::wrap_angle;

/// Flight phase of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPhase {
    Airborne,
    #[default]
    Grounded,
    /// Terminal until the aircraft is reset.
    Crashed,
}

impl FlightPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, FlightPhase::Crashed)
    }
}

/// Pilot inputs for a single step.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightControls {
    /// Throttle setting in [0, 1].
    pub throttle: f64,
    /// Pitch input (radians), positive raises the nose.
    pub pitch: f64,
    /// Roll input (radians).
    pub roll: f64,
    /// Yaw input (radians). An absolute heading angle for Euler attitudes, a
    /// turn rate for quaternion attitudes.
    pub yaw: f64,
}

impl FlightControls {
    pub fn new(throttle: f64, pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            throttle,
            pitch,
            roll,
            yaw,
        }
    }

    /// Returns a copy with every input inside its legal range.
    ///
    /// Non-finite inputs are treated as neutral. Pitch and roll are limited to
    /// `±control_limit`; yaw is wrapped for Euler attitudes and limited for
    /// quaternion attitudes.
    pub fn clamped(self, control_limit: f64, mode: OrientationMode) -> Self {
        let limit = |value: f64| finite_or_zero(value).clamp(-control_limit, control_limit);

        let yaw = match mode {
            OrientationMode::Euler => wrap_angle(finite_or_zero(self.yaw)),
            OrientationMode::Quaternion => limit(self.yaw),
        };

        Self {
            throttle: finite_or_zero(self.throttle).clamp(0.0, 1.0),
            pitch: limit(self.pitch),
            roll: limit(self.roll),
            yaw,
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Full mutable state of a simulated aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position, velocity, acceleration and attitude.
    pub spatial: SpatialComponent,
    /// Control inputs consumed by the next step.
    pub controls: FlightControls,
    /// Scalar forward speed [m/s], lags the throttle setting.
    pub speed: f64,
    /// Compass heading in degrees, [0, 360).
    pub heading: f64,
    /// Height above the world origin in feet.
    pub altitude: f64,
    pub phase: FlightPhase,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self {
            spatial: SpatialComponent::default(),
            controls: FlightControls::default(),
            speed: 0.0,
            heading: 0.0,
            altitude: 0.0,
            phase: FlightPhase::Grounded,
        }
    }
}

impl AircraftState {
    /// Consistent copy of everything a renderer, camera or HUD reads.
    pub fn telemetry(&self) -> FlightTelemetry {
        FlightTelemetry {
            position: self.spatial.position,
            velocity: self.spatial.velocity,
            heading: self.heading,
            altitude: self.altitude,
            pitch: self.controls.pitch,
            roll: self.controls.roll,
            yaw: self.controls.yaw,
            speed: self.speed,
            throttle: self.controls.throttle,
            phase: self.phase,
        }
    }
}

/// Read-only snapshot of an aircraft between steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub heading: f64,
    pub altitude: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub speed: f64,
    pub throttle: f64,
    pub phase: FlightPhase,
}

/// A change of flight phase during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub from: FlightPhase,
    pub to: FlightPhase,
}

/// Details of a touchdown that exceeded the crash attitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrashReport {
    /// Where the aircraft hit the ground.
    pub position: Vector3<f64>,
    /// Velocity just before impact.
    pub impact_velocity: Vector3<f64>,
    /// Airframe pitch at impact (radians).
    pub pitch: f64,
    /// Airframe roll at impact (radians).
    pub roll: f64,
}

/// Domain events produced by one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutcome {
    pub transition: Option<PhaseTransition>,
    pub crash: Option<CrashReport>,
    /// Whether the ground had to push the aircraft back up this step.
    pub ground_contact: bool,
}
