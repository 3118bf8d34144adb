mod flight;

pub use flight::{spawn_aircraft, FlightModelPlugin, FlightSet};
