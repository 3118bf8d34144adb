use bevy::prelude::*;

use crate::components::{CrashReport, FlightPhase};

/// An aircraft touched down beyond its crash attitude.
#[derive(Event, Debug, Clone, Copy)]
pub struct AircraftCrashed {
    pub entity: Entity,
    pub report: CrashReport,
}

/// An aircraft moved between airborne, grounded and crashed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightPhaseChanged {
    pub entity: Entity,
    pub from: FlightPhase,
    pub to: FlightPhase,
}

/// Request to return aircraft to their start configuration.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetAircraft {
    /// Aircraft to reset, or every aircraft when `None`.
    pub entity: Option<Entity>,
}
