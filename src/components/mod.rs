pub mod aircraft;
pub mod events;
pub mod orientation;
pub mod spatial;

pub use aircraft::{
    AeroCoefficients, AircraftState, ConfigError, CrashReport, FixedStartConfig,
    FlightControls, FlightModel, FlightModelConfig, FlightModelVariant, FlightPhase,
    FlightTelemetry, GroundConfig, PhaseTransition, RandomStartConfig, StartConfig, StepOutcome,
};
pub use events::{AircraftCrashed, FlightPhaseChanged, ResetAircraft};
pub use orientation::{Orientation, OrientationMode};
pub use spatial::SpatialComponent;
