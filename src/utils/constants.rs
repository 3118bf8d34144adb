pub const GRAVITY: f64 = 9.81; // m/s^2
pub const FEET_PER_METER: f64 = 3.28084;

pub const DEFAULT_SCALE_HEIGHT: f64 = 10_000.0; // m
pub const MIN_AIR_DENSITY: f64 = 1.0e-9; // Relative density floor

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0; // Default physics timestep
pub const MAX_TIMESTEP: f64 = 0.1; // Maximum physics timestep

// Ground friction factors are expressed per frame at this rate
pub const FRICTION_REFERENCE_RATE: f64 = 60.0; // Hz
