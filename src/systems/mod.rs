pub mod flight;

pub use flight::{advance, flight_model_system, reset_aircraft_system};
