use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;
use crate::utils::constants::{DEFAULT_TIMESTEP, MAX_TIMESTEP};

/// Fixed-step settings shared by every flight model in an `App`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Seconds per physics tick.
    pub timestep: f64,
    /// Upper bound on the step handed to a flight model.
    pub max_timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            max_timestep: MAX_TIMESTEP,
        }
    }
}

impl PhysicsConfig {
    pub fn with_timestep(timestep: f64) -> Self {
        Self {
            timestep,
            ..Default::default()
        }
    }

    /// Step length actually integrated each tick.
    pub fn step_duration(&self) -> f64 {
        self.timestep.min(self.max_timestep)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("timestep", self.timestep),
            ("max_timestep", self.max_timestep),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{field} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
