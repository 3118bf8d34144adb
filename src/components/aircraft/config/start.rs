use bevy::prelude::*;
use nalgebra::{Vector2, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::components::aircraft::config::ConfigError;

/// Where an aircraft starts, and returns to on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StartConfig {
    Fixed(FixedStartConfig),
    Random(RandomStartConfig),
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Fixed(FixedStartConfig::default())
    }
}

impl StartConfig {
    /// Produces a start position (world space, y up) and yaw (radians).
    pub fn generate(&self) -> (Vector3<f64>, f64) {
        match self {
            StartConfig::Fixed(fixed) => (fixed.position, fixed.yaw),
            StartConfig::Random(random) => random.generate(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self {
            StartConfig::Fixed(fixed) => {
                if fixed.position.iter().all(|v| v.is_finite()) && fixed.yaw.is_finite() {
                    Ok(())
                } else {
                    Err(ConfigError::ValidationError(
                        "start position and yaw must be finite".to_string(),
                    ))
                }
            }
            StartConfig::Random(random) => random.validate(),
        }
    }
}

/// A fixed starting position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedStartConfig {
    /// Position in world space [m].
    pub position: Vector3<f64>,
    /// Initial yaw [rad].
    pub yaw: f64,
}

impl Default for FixedStartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            yaw: 0.0,
        }
    }
}

/// Configuration for generating a random starting position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomStartConfig {
    /// Centre of the start area on the ground plane (x, z) [m].
    pub origin: Vector2<f64>,
    /// Spread of the start area around the origin [m].
    pub variance: f64,
    /// Lowest start altitude [m].
    pub min_altitude: f64,
    /// Highest start altitude [m].
    pub max_altitude: f64,
    /// Seed for reproducible starts. Without one every start differs.
    pub seed: Option<u64>,
}

impl Default for RandomStartConfig {
    fn default() -> Self {
        Self {
            origin: Vector2::zeros(),
            variance: 500.0,
            min_altitude: 100.0,
            max_altitude: 1000.0,
            seed: None,
        }
    }
}

impl RandomStartConfig {
    pub fn generate(&self) -> (Vector3<f64>, f64) {
        // Fresh RNG per call so a seeded config always yields the same start
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => {
                debug!("No start seed provided, using entropy");
                ChaCha8Rng::from_entropy()
            }
        };

        let (min_altitude, max_altitude) = if self.min_altitude <= self.max_altitude {
            (self.min_altitude, self.max_altitude)
        } else {
            warn!(
                "Invalid altitude range: min_altitude ({}) > max_altitude ({}). Swapping values.",
                self.min_altitude, self.max_altitude
            );
            (self.max_altitude, self.min_altitude)
        };

        // Gaussian scatter around the origin (Box-Muller), u1 kept away from 0
        let u1 = 1.0 - rng.gen::<f64>();
        let u2 = rng.gen::<f64>();
        let radius = self.variance * (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        let altitude = if max_altitude > min_altitude {
            rng.gen_range(min_altitude..max_altitude)
        } else {
            min_altitude
        };
        let yaw = rng.gen_range(-PI..PI);

        let position = Vector3::new(
            self.origin.x + radius * theta.cos(),
            altitude,
            self.origin.y + radius * theta.sin(),
        );

        (position, yaw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.origin.x,
            self.origin.y,
            self.variance,
            self.min_altitude,
            self.max_altitude,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationError(
                "random start values must be finite".to_string(),
            ));
        }
        if self.variance < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "random start variance must not be negative, got {}",
                self.variance
            )));
        }
        Ok(())
    }
}
