use serde::{Deserialize, Serialize};
use std::path::Path;

use super::physics::PhysicsConfig;
use crate::components::{ConfigError, FlightControls, FlightModelConfig};

/// A headless run: one aircraft flown with constant inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub aircraft: FlightModelConfig,
    pub controls: FlightControls,
    /// Simulated seconds to run for.
    pub duration: f64,
    /// Simulated seconds between telemetry reports.
    pub report_interval: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            aircraft: FlightModelConfig::default(),
            controls: FlightControls::new(0.5, 0.0, 0.0, 0.0),
            duration: 60.0,
            report_interval: 1.0,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.aircraft.validate()?;

        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "duration must be non-negative, got {}",
                self.duration
            )));
        }
        if !(self.report_interval.is_finite() && self.report_interval > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "report_interval must be positive, got {}",
                self.report_interval
            )));
        }
        Ok(())
    }

    /// Number of physics ticks covering `duration`.
    pub fn total_steps(&self) -> u64 {
        (self.duration / self.physics.step_duration()).round() as u64
    }

    /// Physics ticks between telemetry reports, at least one.
    pub fn report_every(&self) -> u64 {
        ((self.report_interval / self.physics.step_duration()).round() as u64).max(1)
    }
}
