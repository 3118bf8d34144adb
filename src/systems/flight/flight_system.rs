use bevy::prelude::*;

use crate::components::{
    AircraftCrashed, FlightControls, FlightModel, FlightPhaseChanged, ResetAircraft,
};
use crate::resources::PhysicsConfig;

/// Steps every flight model by one physics tick.
///
/// Aircraft carrying a `FlightControls` component have those inputs applied
/// (clamped) before the step. Crashes and phase changes are forwarded as events.
pub fn flight_model_system(
    mut query: Query<(Entity, &mut FlightModel, Option<&FlightControls>)>,
    physics: Res<PhysicsConfig>,
    mut crash_events: EventWriter<AircraftCrashed>,
    mut phase_events: EventWriter<FlightPhaseChanged>,
) {
    let dt = physics.step_duration();

    for (entity, mut model, controls) in query.iter_mut() {
        if let Some(controls) = controls {
            model.set_controls(*controls);
        }

        let outcome = model.step(dt);

        if let Some(transition) = outcome.transition {
            phase_events.send(FlightPhaseChanged {
                entity,
                from: transition.from,
                to: transition.to,
            });
        }
        if let Some(report) = outcome.crash {
            crash_events.send(AircraftCrashed { entity, report });
        }
    }
}

/// Returns aircraft to their start configuration on request.
pub fn reset_aircraft_system(
    mut requests: EventReader<ResetAircraft>,
    mut query: Query<(Entity, &mut FlightModel, Option<&mut FlightControls>)>,
) {
    for request in requests.read() {
        for (entity, mut model, controls) in query.iter_mut() {
            if request.entity.is_some_and(|target| target != entity) {
                continue;
            }

            info!("Resetting aircraft {:?}", entity);
            model.reset();
            if let Some(mut controls) = controls {
                *controls = model.controls();
            }
        }
    }
}
