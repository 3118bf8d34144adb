pub mod config;
pub mod model;
pub mod state;

pub use config::{
    AeroCoefficients, ConfigError, FixedStartConfig, FlightModelConfig, FlightModelVariant,
    GroundConfig, RandomStartConfig, StartConfig,
};
pub use model::FlightModel;
pub use state::{
    AircraftState, CrashReport, FlightControls, FlightPhase, FlightTelemetry, PhaseTransition,
    StepOutcome,
};
