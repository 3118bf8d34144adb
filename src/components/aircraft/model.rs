use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::aircraft::config::{ConfigError, FlightModelConfig};
use crate::components::{
    AircraftState, FlightControls, FlightPhase, FlightTelemetry, Orientation, OrientationMode,
    SpatialComponent, StepOutcome,
};
use crate::systems::flight::advance;
use crate::utils::{heading_from_forward, meters_to_feet};

/// A simulated aircraft: validated constants plus the state they evolve.
///
/// Each model is self-contained, so any number of them can run side by side.
#[derive(Component, Debug, Clone)]
pub struct FlightModel {
    config: FlightModelConfig,
    state: AircraftState,
}

impl FlightModel {
    /// Validates `config` and places the aircraft at its start position.
    pub fn new(config: FlightModelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = initial_state(&config);

        info!(
            "Created {:?} flight model '{}' at {:?} ({:?})",
            config.variant, config.name, state.spatial.position, state.phase
        );

        Ok(Self { config, state })
    }

    /// Advances the aircraft by `dt` seconds with the current controls.
    pub fn step(&mut self, dt: f64) -> StepOutcome {
        advance(&mut self.state, &self.config, dt)
    }

    /// Sets the pilot inputs for the following steps, clamped to legal ranges.
    pub fn set_controls(&mut self, controls: FlightControls) {
        self.state.controls = controls.clamped(self.config.control_limit, self.config.orientation);
    }

    pub fn controls(&self) -> FlightControls {
        self.state.controls
    }

    /// Returns the aircraft to its start configuration, clearing any crash.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.config);
        debug!(
            "Reset flight model '{}' to {:?}",
            self.config.name, self.state.spatial.position
        );
    }

    pub fn telemetry(&self) -> FlightTelemetry {
        self.state.telemetry()
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    /// Direct access for external resets and scenario setup.
    pub fn state_mut(&mut self) -> &mut AircraftState {
        &mut self.state
    }

    pub fn config(&self) -> &FlightModelConfig {
        &self.config
    }

    pub fn phase(&self) -> FlightPhase {
        self.state.phase
    }

    pub fn is_crashed(&self) -> bool {
        self.state.phase == FlightPhase::Crashed
    }
}

fn initial_state(config: &FlightModelConfig) -> AircraftState {
    let (start, yaw) = config.start.generate();
    let ground_level = config.ground.level;

    let position = Vector3::new(start.x, start.y.max(ground_level), start.z);
    let attitude = Orientation::new(config.orientation, 0.0, 0.0, yaw);
    let phase = if position.y > ground_level {
        FlightPhase::Airborne
    } else {
        FlightPhase::Grounded
    };

    // Euler attitudes hold the start yaw as the yaw input; quaternion yaw is a rate
    let controls = match config.orientation {
        OrientationMode::Euler => FlightControls {
            yaw,
            ..Default::default()
        },
        OrientationMode::Quaternion => FlightControls::default(),
    }
    .clamped(config.control_limit, config.orientation);

    AircraftState {
        spatial: SpatialComponent::at_position(position, attitude),
        controls,
        speed: 0.0,
        heading: heading_from_forward(&attitude.forward()),
        altitude: meters_to_feet(position.y),
        phase,
    }
}
