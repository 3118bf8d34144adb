pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{FlightControls, FlightModel, FlightModelConfig, FlightPhase, FlightTelemetry};
pub use plugins::FlightModelPlugin;
pub use resources::PhysicsConfig;
