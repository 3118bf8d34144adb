use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::components::aircraft::config::{ConfigError, StartConfig};
use crate::components::OrientationMode;
use crate::utils::constants::{DEFAULT_SCALE_HEIGHT, GRAVITY};

/// Which set of force, gravity and ground formulas a model uses.
///
/// The two variants are separate models; their formulas are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightModelVariant {
    /// Lift only from pitch, gravity attenuated by air density, hard ground clamp.
    #[default]
    Realistic,
    /// Lift from forward speed alone, speed-relieved gravity, bouncy ground, stalls.
    Arcade,
}

/// Scaling constants for the aerodynamic and propulsive terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroCoefficients {
    /// Lift coefficient gain on the pitch term.
    pub lift_slope: f64,
    /// Lift coefficient at zero pitch (arcade only).
    pub base_lift: f64,
    /// Converts `CL * speed^2 * density` into an acceleration.
    pub lift_scale: f64,
    /// Drag coefficient at zero pitch.
    pub base_drag: f64,
    /// Additional drag per unit of angle of attack.
    pub induced_drag: f64,
    /// Converts speed into forward thrust acceleration.
    pub thrust_scale: f64,
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::realistic()
    }
}

impl AeroCoefficients {
    pub fn realistic() -> Self {
        Self {
            lift_slope: 0.5,
            base_lift: 0.0,
            lift_scale: 1.0e-4,
            base_drag: 0.01,
            induced_drag: 0.1,
            thrust_scale: 0.01,
        }
    }

    pub fn arcade() -> Self {
        Self {
            lift_slope: 0.5,
            base_lift: 0.3,
            lift_scale: 5.0e-4,
            base_drag: 0.05,
            induced_drag: 0.2,
            thrust_scale: 0.05,
        }
    }
}

/// Ground plane and contact response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Height of the ground plane [m].
    pub level: f64,
    /// Fraction of the impact speed returned as a bounce (arcade only).
    pub restitution: f64,
    /// Impacts slower than this do not bounce [m/s].
    pub min_bounce_speed: f64,
    /// Fraction of speed kept per 1/60 s of ground contact.
    pub friction: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            level: 0.0,
            restitution: 0.0,
            min_bounce_speed: 0.0,
            friction: 0.95,
        }
    }
}

/// Constants for one flight model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModelConfig {
    pub name: String,
    pub variant: FlightModelVariant,
    pub orientation: OrientationMode,
    /// Speed reached at full throttle [m/s].
    pub max_speed: f64,
    /// Rate constant of the throttle-to-speed lag [1/s].
    pub throttle_response: f64,
    /// Altitude over which air density falls by a factor e [m].
    pub scale_height: f64,
    /// Gravitational acceleration [m/s^2].
    pub gravity: f64,
    /// Fraction of gravity cancelled at full speed (arcade only).
    pub gravity_relief: f64,
    /// Largest pitch/roll input accepted [rad].
    pub control_limit: f64,
    /// Rotation rate per radian of input for quaternion attitudes [1/s].
    pub control_rate: f64,
    pub aero: AeroCoefficients,
    pub ground: GroundConfig,
    /// Airborne speeds below this lose all lift [m/s].
    pub stall_speed: Option<f64>,
    /// Touchdowns with |pitch| or |roll| above this crash [rad].
    pub crash_attitude: Option<f64>,
    pub start: StartConfig,
}

impl Default for FlightModelConfig {
    fn default() -> Self {
        Self::realistic()
    }
}

impl FlightModelConfig {
    /// The browser flight model: slow throttle response, density-attenuated
    /// gravity, Euler attitude and a hard ground clamp.
    pub fn realistic() -> Self {
        Self {
            name: "realistic".to_string(),
            variant: FlightModelVariant::Realistic,
            orientation: OrientationMode::Euler,
            max_speed: 2000.0,
            throttle_response: 0.1,
            scale_height: DEFAULT_SCALE_HEIGHT,
            gravity: GRAVITY,
            gravity_relief: 0.5,
            control_limit: PI / 3.0,
            control_rate: 1.0,
            aero: AeroCoefficients::realistic(),
            ground: GroundConfig::default(),
            stall_speed: None,
            crash_attitude: Some(0.8),
            start: StartConfig::default(),
        }
    }

    /// A forgiving model: fast spool-up, lift from speed alone, quaternion
    /// attitude, stalls and bouncy landings.
    pub fn arcade() -> Self {
        Self {
            name: "arcade".to_string(),
            variant: FlightModelVariant::Arcade,
            orientation: OrientationMode::Quaternion,
            max_speed: 200.0,
            throttle_response: 2.0,
            scale_height: DEFAULT_SCALE_HEIGHT,
            gravity: GRAVITY,
            gravity_relief: 0.5,
            control_limit: PI / 3.0,
            control_rate: 1.0,
            aero: AeroCoefficients::arcade(),
            ground: GroundConfig {
                level: 0.0,
                restitution: 0.3,
                min_bounce_speed: 1.0,
                friction: 0.999,
            },
            stall_speed: Some(40.0),
            crash_attitude: Some(0.8),
            start: StartConfig::default(),
        }
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.start = start;
        self
    }

    pub fn with_ground_level(mut self, level: f64) -> Self {
        self.ground.level = level;
        self
    }

    /// Rejects constants that would make a step degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_speed", self.max_speed)?;
        positive("throttle_response", self.throttle_response)?;
        positive("scale_height", self.scale_height)?;
        positive("control_limit", self.control_limit)?;
        non_negative("gravity", self.gravity)?;
        non_negative("control_rate", self.control_rate)?;
        unit_interval("gravity_relief", self.gravity_relief)?;

        non_negative("aero.lift_slope", self.aero.lift_slope)?;
        finite("aero.base_lift", self.aero.base_lift)?;
        non_negative("aero.lift_scale", self.aero.lift_scale)?;
        non_negative("aero.base_drag", self.aero.base_drag)?;
        non_negative("aero.induced_drag", self.aero.induced_drag)?;
        non_negative("aero.thrust_scale", self.aero.thrust_scale)?;

        finite("ground.level", self.ground.level)?;
        non_negative("ground.min_bounce_speed", self.ground.min_bounce_speed)?;
        if !(0.0..1.0).contains(&self.ground.restitution) {
            return Err(invalid(format!(
                "ground.restitution must be in [0, 1), got {}",
                self.ground.restitution
            )));
        }
        if !(self.ground.friction > 0.0 && self.ground.friction <= 1.0) {
            return Err(invalid(format!(
                "ground.friction must be in (0, 1], got {}",
                self.ground.friction
            )));
        }

        if let Some(stall_speed) = self.stall_speed {
            non_negative("stall_speed", stall_speed)?;
        }
        if let Some(crash_attitude) = self.crash_attitude {
            positive("crash_attitude", crash_attitude)?;
        }

        self.start.validate()
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError(message)
}

fn finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must not be negative, got {value}")))
    }
}

fn unit_interval(name: &str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be in [0, 1], got {value}")))
    }
}
