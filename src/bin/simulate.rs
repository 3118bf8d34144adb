use bevy::{log::LogPlugin, prelude::*};
use std::env;

use aviator::{
    components::FlightModel,
    plugins::FlightModelPlugin,
    resources::SimulationConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::load(&path)?,
        None => SimulationConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(FlightModelPlugin::with_config(config.physics.clone()));

    let mut model = FlightModel::new(config.aircraft.clone())?;
    model.set_controls(config.controls);
    let controls = model.controls();
    let entity = app
        .world_mut()
        .spawn((Name::new(config.aircraft.name.clone()), model, controls))
        .id();

    // Run startup once; the fixed schedule is then driven by hand
    app.update();

    let total_steps = config.total_steps();
    let report_every = config.report_every();
    info!(
        "Simulating {} steps of {:.4} s for '{}'",
        total_steps,
        config.physics.step_duration(),
        config.aircraft.name
    );

    report(&app, entity)?;
    for step in 1..=total_steps {
        app.world_mut().run_schedule(FixedUpdate);

        let crashed = app
            .world()
            .get::<FlightModel>(entity)
            .is_some_and(FlightModel::is_crashed);

        if crashed || step % report_every == 0 {
            report(&app, entity)?;
        }
        if crashed {
            warn!("Aircraft crashed after {} steps", step);
            break;
        }
    }

    Ok(())
}

fn report(app: &App, entity: Entity) -> Result<(), Box<dyn std::error::Error>> {
    let model = app
        .world()
        .get::<FlightModel>(entity)
        .ok_or("aircraft entity missing")?;
    println!("{}", serde_json::to_string(&model.telemetry())?);
    Ok(())
}
