use nalgebra::Vector3;

use crate::components::{
    FlightControls, FlightModelConfig, FlightModelVariant, SpatialComponent,
};
use crate::utils::constants::MIN_AIR_DENSITY;

/// Accelerations acting on the airframe for one step, excluding gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub thrust: Vector3<f64>,
    /// Relative air density the forces were computed with.
    pub density: f64,
}

impl AeroForces {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag + self.thrust
    }
}

/// Relative air density, 1 at `altitude` 0 and thinning exponentially with height.
///
/// Never reaches zero.
pub fn air_density(altitude: f64, scale_height: f64) -> f64 {
    (-altitude / scale_height).exp().max(MIN_AIR_DENSITY)
}

/// Lift coefficient for a pitch (angle of attack) input.
pub fn lift_coefficient(config: &FlightModelConfig, pitch: f64) -> f64 {
    let aero = &config.aero;
    match config.variant {
        FlightModelVariant::Realistic => aero.lift_slope * pitch.sin(),
        // Peaks at 45 degrees of pitch
        FlightModelVariant::Arcade => aero.base_lift + aero.lift_slope * (2.0 * pitch).sin(),
    }
}

/// Drag coefficient, growing monotonically with |pitch|.
pub fn drag_coefficient(config: &FlightModelConfig, pitch: f64) -> f64 {
    let aero = &config.aero;
    match config.variant {
        FlightModelVariant::Realistic => aero.base_drag + aero.induced_drag * pitch.abs(),
        FlightModelVariant::Arcade => aero.base_drag + aero.induced_drag * pitch * pitch,
    }
}

/// Fraction of full gravity that acts this step, always within [0, 1].
pub fn gravity_factor(config: &FlightModelConfig, density: f64, speed: f64, stalled: bool) -> f64 {
    if stalled {
        return 1.0;
    }

    let factor = match config.variant {
        FlightModelVariant::Realistic => 1.0 - density,
        FlightModelVariant::Arcade => {
            let speed_ratio = (speed / config.max_speed).min(1.0);
            1.0 - config.gravity_relief * speed_ratio
        }
    };
    factor.clamp(0.0, 1.0)
}

/// Lift along body up, drag against velocity, thrust along body forward.
///
/// Density is taken at the height above the ground plane, so an aircraft
/// resting on the ground sees the same air at any ground level. A stalled
/// wing produces no lift regardless of pitch.
pub fn compute_forces(
    config: &FlightModelConfig,
    spatial: &SpatialComponent,
    controls: &FlightControls,
    speed: f64,
    stalled: bool,
) -> AeroForces {
    let height = spatial.position.y - config.ground.level;
    let density = air_density(height, config.scale_height);
    let aero = &config.aero;

    let lift = if stalled {
        Vector3::zeros()
    } else {
        let lift_coefficient = lift_coefficient(config, controls.pitch);
        spatial.attitude.up() * (lift_coefficient * speed * speed * density * aero.lift_scale)
    };

    let drag_coefficient = drag_coefficient(config, controls.pitch);
    let drag = -spatial.velocity * (drag_coefficient * density);

    let thrust = spatial.attitude.forward() * (speed * aero.thrust_scale);

    AeroForces {
        lift,
        drag,
        thrust,
        density,
    }
}
