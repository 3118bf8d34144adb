use bevy::prelude::*;

use crate::components::{
    AircraftCrashed, FlightModel, FlightModelConfig, FlightPhaseChanged, ResetAircraft,
};
use crate::resources::PhysicsConfig;
use crate::systems::{flight_model_system, reset_aircraft_system};

/// Flight simulation stages, run in order every fixed tick.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Resets and control updates.
    Input,
    /// Flight model integration.
    Dynamics,
}

/// Runs every `FlightModel` in the app on the fixed-timestep schedule.
#[derive(Default)]
pub struct FlightModelPlugin {
    config: PhysicsConfig,
}

impl FlightModelPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FlightModelPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                warn!("{}; falling back to default physics settings", e);
                PhysicsConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_seconds(config.timestep))
            .insert_resource(config);

        app.add_event::<AircraftCrashed>()
            .add_event::<FlightPhaseChanged>()
            .add_event::<ResetAircraft>();

        app.configure_sets(FixedUpdate, (FlightSet::Input, FlightSet::Dynamics).chain());

        app.add_systems(
            FixedUpdate,
            (
                reset_aircraft_system.in_set(FlightSet::Input),
                flight_model_system.in_set(FlightSet::Dynamics),
            ),
        );
    }
}

/// Spawns an aircraft entity driven by its `FlightControls`.
///
/// Returns `None` and logs the reason when `config` does not validate.
pub fn spawn_aircraft(commands: &mut Commands, config: FlightModelConfig) -> Option<Entity> {
    let name = config.name.clone();
    match FlightModel::new(config) {
        Ok(model) => {
            let controls = model.controls();
            let entity = commands.spawn((Name::new(name), model, controls)).id();
            info!("Spawned aircraft {:?}", entity);
            Some(entity)
        }
        Err(e) => {
            error!("Failed to spawn aircraft '{}': {}", name, e);
            None
        }
    }
}
