mod flight;
mod loader;
mod start;

pub use flight::{AeroCoefficients, FlightModelConfig, FlightModelVariant, GroundConfig};
pub use loader::ConfigError;
pub use start::{FixedStartConfig, RandomStartConfig, StartConfig};
