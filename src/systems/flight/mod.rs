pub mod aerodynamics;
mod dynamics;
mod flight_system;
pub mod ground;

pub use aerodynamics::{air_density, AeroForces};
pub use dynamics::advance;
pub use flight_system::{flight_model_system, reset_aircraft_system};
pub use ground::GroundResponse;
