use approx::assert_relative_eq;
use aviator::components::{FlightControls, FlightModel, FlightModelConfig, FlightPhase};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::common::{
    assert_at_rest_on_ground, assert_state_valid, assert_telemetry_consistent, config_at_height,
    full_throttle, idle, steep_descent, step_until, DT,
};

fn model_at(config: FlightModelConfig, height: f64) -> FlightModel {
    FlightModel::new(config_at_height(config, height)).unwrap()
}

#[test]
fn test_realistic_takeoff_roll_stays_on_ground() {
    let mut model = model_at(FlightModelConfig::realistic(), 0.0);
    model.set_controls(full_throttle());

    let mut previous_speed = model.state().speed;
    for _ in 0..600 {
        model.step(DT);
        let state = model.state();
        assert_state_valid(state);

        // Density at sea level cancels gravity and zero pitch gives no lift
        assert_eq!(state.spatial.position.y, 0.0);
        assert_eq!(state.phase, FlightPhase::Grounded);
        assert!(state.speed > previous_speed && state.speed < 2000.0);
        previous_speed = state.speed;
    }

    let expected = 2000.0 * (1.0 - (1.0 - 0.1 * DT).powi(600));
    assert_relative_eq!(model.state().speed, expected, max_relative = 1e-9);
    assert!(model.state().spatial.position.z > 0.0);
}

#[test]
fn test_realistic_takeoff_roll_independent_of_ground_level() {
    let mut at_sea_level = model_at(FlightModelConfig::realistic(), 0.0);
    let mut raised = model_at(FlightModelConfig::realistic().with_ground_level(1.0), 1.0);
    at_sea_level.set_controls(full_throttle());
    raised.set_controls(full_throttle());

    for _ in 0..600 {
        let outcome = raised.step(DT);
        at_sea_level.step(DT);

        assert!(!outcome.ground_contact);
        assert_eq!(raised.state().spatial.position.y, 1.0);
        assert_eq!(raised.phase(), FlightPhase::Grounded);
    }

    assert_relative_eq!(
        raised.state().speed,
        at_sea_level.state().speed,
        max_relative = 1e-12
    );
    assert!(raised.state().speed > 1200.0);
}

#[test]
fn test_rest_on_ground_is_idempotent() {
    for level in [0.0, 1.0] {
        for config in [FlightModelConfig::realistic(), FlightModelConfig::arcade()] {
            let variant = config.variant;
            let mut model = model_at(config.with_ground_level(level), level);
            model.set_controls(idle());

            for step in 0..600 {
                model.step(DT);
                let state = model.state();
                assert_eq!(
                    state.spatial.position.y, level,
                    "{variant:?} left ground level {level} at step {step}"
                );
                assert_eq!(state.spatial.velocity.y, 0.0);
                assert_eq!(state.speed, 0.0);
                assert_eq!(state.phase, FlightPhase::Grounded);
            }
            assert_at_rest_on_ground(&model);
        }
    }
}

#[test]
fn test_arcade_takeoff_from_speed() {
    let mut model = model_at(FlightModelConfig::arcade(), 0.0);
    model.set_controls(full_throttle());

    let liftoff = step_until(&mut model, 300, |model| model.phase() == FlightPhase::Airborne)
        .expect("arcade aircraft should lift off at full throttle");
    assert!((60..150).contains(&liftoff), "lifted off after {liftoff} steps");

    for _ in 0..600 {
        model.step(DT);
        assert_state_valid(model.state());
    }
    assert!(model.state().spatial.position.y > 10.0);
    assert_eq!(model.phase(), FlightPhase::Airborne);
    assert_relative_eq!(model.state().speed, 200.0, epsilon = 1e-3);
}

#[test]
fn test_realistic_free_fall_lands_and_stays_down() {
    let mut model = model_at(FlightModelConfig::realistic(), 100.0);
    model.set_controls(idle());

    let mut previous_height = model.state().spatial.position.y;
    let landed = step_until(&mut model, 6000, |model| {
        let height = model.state().spatial.position.y;
        let descending = height < previous_height;
        previous_height = height;
        assert!(descending || model.phase() == FlightPhase::Grounded);
        model.phase() == FlightPhase::Grounded
    })
    .expect("aircraft should reach the ground");
    assert!((3000..4000).contains(&landed), "landed after {landed} steps");
    assert_at_rest_on_ground(&model);

    for _ in 0..120 {
        model.step(DT);
        assert_at_rest_on_ground(&model);
    }
}

#[test]
fn test_arcade_free_fall_bounces_then_settles() {
    let mut model = model_at(FlightModelConfig::arcade(), 100.0);

    let mut rebounds = Vec::new();
    let mut previous_velocity = model.state().spatial.velocity.y;
    for _ in 0..1200 {
        let outcome = model.step(DT);
        let velocity = model.state().spatial.velocity.y;
        if outcome.ground_contact && previous_velocity < 0.0 && velocity > 0.0 {
            rebounds.push(velocity);
        }
        previous_velocity = velocity;
        assert_state_valid(model.state());
    }

    assert!(rebounds.len() >= 2, "rebounds: {rebounds:?}");
    assert!((10.0..15.0).contains(&rebounds[0]), "first rebound {}", rebounds[0]);
    assert!(rebounds.windows(2).all(|pair| pair[1] < pair[0]));
    assert_at_rest_on_ground(&model);
}

#[test]
fn test_steep_touchdown_crashes_realistic() {
    let mut model = steep_descent(FlightModelConfig::realistic(), 10.0, 1.0, 5.0);
    // Euler attitudes follow the stick
    model.set_controls(FlightControls::new(0.0, 1.0, 0.0, 0.0));

    let mut crash = None;
    for _ in 0..600 {
        let outcome = model.step(DT);
        if outcome.crash.is_some() {
            crash = outcome.crash;
            assert_eq!(
                outcome.transition.map(|transition| transition.to),
                Some(FlightPhase::Crashed)
            );
            break;
        }
    }

    let report = crash.expect("steep touchdown should crash");
    assert_relative_eq!(report.pitch, 1.0);
    assert!(report.impact_velocity.y < 0.0);

    let state = *model.state();
    assert!(model.is_crashed());
    assert_eq!(state.speed, 0.0);
    assert_eq!(state.spatial.velocity, nalgebra::Vector3::zeros());
    assert_eq!(state.spatial.position.y, 0.0);

    // Crashed aircraft stay put until reset
    model.set_controls(full_throttle());
    for _ in 0..60 {
        let outcome = model.step(DT);
        assert!(outcome.crash.is_none() && outcome.transition.is_none());
    }
    assert_eq!(model.state().spatial, state.spatial);
}

#[test]
fn test_steep_touchdown_crashes_arcade() {
    let mut model = steep_descent(FlightModelConfig::arcade(), 10.0, 1.0, 5.0);

    let crashed_after = step_until(&mut model, 600, FlightModel::is_crashed);
    assert!(crashed_after.is_some());
    assert_eq!(model.state().spatial.velocity, nalgebra::Vector3::zeros());
}

#[test]
fn test_shallow_touchdown_lands() {
    let mut model = steep_descent(FlightModelConfig::realistic(), 10.0, 0.3, 5.0);
    model.set_controls(FlightControls::new(0.0, 0.3, 0.0, 0.0));

    let landed = step_until(&mut model, 600, |model| model.phase() != FlightPhase::Airborne);
    assert!(landed.is_some());
    assert_eq!(model.phase(), FlightPhase::Grounded);
}

#[test]
fn test_steep_attitude_on_ground_does_not_crash() {
    let mut model = steep_descent(FlightModelConfig::realistic(), 0.0, 1.0, 5.0);
    model.set_controls(FlightControls::new(0.0, 1.0, 0.0, 0.0));

    for _ in 0..60 {
        assert!(model.step(DT).crash.is_none());
    }
    assert_eq!(model.phase(), FlightPhase::Grounded);
}

#[test]
fn test_reset_after_crash() {
    let mut model = steep_descent(FlightModelConfig::arcade(), 10.0, 1.0, 5.0);
    step_until(&mut model, 600, FlightModel::is_crashed).expect("should crash");

    model.reset();
    assert!(!model.is_crashed());
    assert_eq!(model.phase(), FlightPhase::Airborne);
    assert_eq!(model.state().spatial.position.y, 10.0);

    model.step(DT);
    assert!(model.state().spatial.position.y < 10.0);
}

#[test]
fn test_euler_heading_follows_yaw_input() {
    let mut model = model_at(FlightModelConfig::realistic(), 500.0);
    // Forward is +z, which reads as 90 degrees
    assert_relative_eq!(model.state().heading, 90.0, epsilon = 1e-9);

    model.set_controls(FlightControls::new(0.5, 0.0, 0.0, 1.0));
    model.step(DT);
    assert_relative_eq!(
        model.state().heading,
        (FRAC_PI_2 - 1.0).to_degrees(),
        epsilon = 1e-9
    );
    assert_telemetry_consistent(&model);
}

#[test]
fn test_quaternion_yaw_rate_turns_aircraft() {
    let mut model = model_at(FlightModelConfig::arcade(), 500.0);
    model.set_controls(FlightControls::new(1.0, 0.0, 0.0, 0.5));

    for _ in 0..120 {
        model.step(DT);
        assert_state_valid(model.state());
    }

    let heading = model.state().heading;
    assert!((10.0..80.0).contains(&heading), "heading {heading}");
    let telemetry = model.telemetry();
    assert_relative_eq!(telemetry.pitch, 0.0, epsilon = 1e-9);
    assert_relative_eq!(telemetry.roll, 0.0, epsilon = 1e-9);
}

#[test]
fn test_heading_stays_in_range_through_euler_wrap() {
    let mut model = model_at(FlightModelConfig::realistic(), 500.0);
    let (mut lowest, mut highest) = (f64::MAX, f64::MIN);

    // Ten full turns of absolute yaw input, running well past +/- PI
    for step in 0..1_200 {
        let yaw = -PI + step as f64 * 0.05;
        model.set_controls(FlightControls::new(0.5, 0.0, 0.0, yaw));
        model.step(DT);

        let heading = model.state().heading;
        assert!((0.0..360.0).contains(&heading), "heading {heading} at yaw {yaw}");
        lowest = lowest.min(heading);
        highest = highest.max(heading);
    }
    assert!(lowest < 5.0 && highest > 355.0, "heading range {lowest}..{highest}");
}

#[test]
fn test_heading_stays_in_range_through_quaternion_turns() {
    let mut model = model_at(FlightModelConfig::arcade(), 5_000.0);
    model.set_controls(FlightControls::new(1.0, 0.0, 0.0, 1.0));
    let (mut lowest, mut highest) = (f64::MAX, f64::MIN);

    for _ in 0..6_000 {
        model.step(DT);
        let heading = model.state().heading;
        assert!((0.0..360.0).contains(&heading), "heading {heading}");
        lowest = lowest.min(heading);
        highest = highest.max(heading);
    }
    assert_state_valid(model.state());
    assert!(lowest < 5.0 && highest > 355.0, "heading range {lowest}..{highest}");
}

#[test]
fn test_models_are_independent_and_deterministic() {
    let config = config_at_height(FlightModelConfig::arcade(), 50.0);
    let controls = FlightControls::new(0.8, 0.1, -0.05, 0.2);

    let mut solo = FlightModel::new(config.clone()).unwrap();
    solo.set_controls(controls);
    for _ in 0..300 {
        solo.step(DT);
    }

    let mut first = FlightModel::new(config.clone()).unwrap();
    let mut second = model_at(FlightModelConfig::realistic(), 0.0);
    first.set_controls(controls);
    second.set_controls(full_throttle());
    for _ in 0..300 {
        first.step(DT);
        second.step(DT);
    }

    assert_eq!(first.state(), solo.state());
}
