use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AircraftState, CrashReport, FlightModelConfig, FlightModelVariant, FlightPhase,
};
use crate::utils::constants::FRICTION_REFERENCE_RATE;

/// Result of checking an aircraft against the ground plane after integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundResponse {
    /// Above the ground, nothing to resolve.
    Clear,
    /// Pushed back onto the ground.
    Contact,
    /// Touched down beyond the crash attitude.
    Crash(CrashReport),
}

/// Pushes an aircraft that sank below the ground back onto it.
///
/// Realistic models stop vertical motion dead; arcade models bounce when the
/// impact is fast enough. Ground contact bleeds off speed. A touchdown from
/// the air with too much pitch or roll zeroes all motion and reports a crash.
pub fn resolve_ground_contact(
    state: &mut AircraftState,
    config: &FlightModelConfig,
    dt: f64,
) -> GroundResponse {
    let ground = &config.ground;
    if state.spatial.position.y >= ground.level {
        return GroundResponse::Clear;
    }

    let impact_velocity = state.spatial.velocity;
    let touchdown = state.phase == FlightPhase::Airborne && impact_velocity.y < 0.0;
    state.spatial.position.y = ground.level;

    if touchdown {
        if let Some(limit) = config.crash_attitude {
            let (pitch, roll) = state.spatial.attitude.pitch_roll();
            if pitch.abs() > limit || roll.abs() > limit {
                state.spatial.velocity = Vector3::zeros();
                state.spatial.acceleration = Vector3::zeros();
                state.speed = 0.0;

                return GroundResponse::Crash(CrashReport {
                    position: state.spatial.position,
                    impact_velocity,
                    pitch,
                    roll,
                });
            }
        }
    }

    if impact_velocity.y < 0.0 {
        state.spatial.velocity.y = match config.variant {
            FlightModelVariant::Realistic => 0.0,
            FlightModelVariant::Arcade => {
                let impact_speed = -impact_velocity.y;
                if impact_speed > ground.min_bounce_speed {
                    trace!("Bouncing at {:.2} m/s", impact_speed);
                    impact_speed * ground.restitution
                } else {
                    0.0
                }
            }
        };
    }

    state.speed *= ground.friction.powf(dt * FRICTION_REFERENCE_RATE);

    GroundResponse::Contact
}
