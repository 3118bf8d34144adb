use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AircraftState, FlightModelConfig, FlightPhase, PhaseTransition, StepOutcome,
};
use crate::systems::flight::aerodynamics::{compute_forces, gravity_factor};
use crate::systems::flight::ground::{resolve_ground_contact, GroundResponse};
use crate::utils::{heading_from_forward, meters_to_feet};

/// Advances an aircraft by `dt` seconds.
///
/// Integration is explicit Euler, which gains energy at large `dt`; callers
/// should keep `dt` at or below `PhysicsConfig::max_timestep`. Gravity is
/// folded into the velocity update before positions move, so a resting
/// aircraft in the air starts falling on its very first step.
///
/// Crashed aircraft and non-positive or non-finite `dt` leave the state
/// untouched.
pub fn advance(state: &mut AircraftState, config: &FlightModelConfig, dt: f64) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if state.phase.is_terminal() {
        return outcome;
    }
    if !(dt.is_finite() && dt > 0.0) {
        debug!("Ignoring flight step with dt = {}", dt);
        return outcome;
    }

    let previous_phase = state.phase;
    let controls = state.controls;

    // Speed lags the throttle setting
    let target_speed = controls.throttle * config.max_speed;
    let blend = (config.throttle_response * dt).min(1.0);
    state.speed = (state.speed + (target_speed - state.speed) * blend).max(0.0);

    // Forces from the attitude held at the start of the step
    let stalled = previous_phase == FlightPhase::Airborne
        && config.stall_speed.is_some_and(|stall_speed| state.speed < stall_speed);
    let forces = compute_forces(config, &state.spatial, &controls, state.speed, stalled);
    let gravity =
        config.gravity * gravity_factor(config, forces.density, state.speed, stalled);

    let spatial = &mut state.spatial;
    spatial.acceleration = forces.total() - Vector3::y() * gravity;
    spatial.velocity += spatial.acceleration * dt;
    spatial.position += spatial.velocity * dt;

    // Control authority grows with airspeed
    let control_response = state.speed / config.max_speed;
    spatial.attitude.apply(
        controls.pitch,
        controls.roll,
        controls.yaw,
        config.control_rate * dt * control_response,
    );
    state.heading = heading_from_forward(&spatial.attitude.forward());

    let next_phase = match resolve_ground_contact(state, config, dt) {
        GroundResponse::Clear => {
            if state.spatial.position.y > config.ground.level {
                FlightPhase::Airborne
            } else {
                previous_phase
            }
        }
        GroundResponse::Contact => {
            outcome.ground_contact = true;
            FlightPhase::Grounded
        }
        GroundResponse::Crash(report) => {
            warn!(
                "Aircraft crashed at {:?} (pitch {:.2} rad, roll {:.2} rad, impact {:.1} m/s)",
                report.position,
                report.pitch,
                report.roll,
                report.impact_velocity.norm()
            );
            outcome.ground_contact = true;
            outcome.crash = Some(report);
            FlightPhase::Crashed
        }
    };

    if next_phase != previous_phase {
        info!("Flight phase {:?} -> {:?}", previous_phase, next_phase);
        state.phase = next_phase;
        outcome.transition = Some(PhaseTransition {
            from: previous_phase,
            to: next_phase,
        });
    }

    state.altitude = meters_to_feet(state.spatial.position.y);

    trace!(
        "speed {:.2} m/s, position {:?}, velocity {:?}, heading {:.1}",
        state.speed,
        state.spatial.position,
        state.spatial.velocity,
        state.heading
    );

    outcome
}
