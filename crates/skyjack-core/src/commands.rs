//! Operator commands sent from the UI to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ScenarioKind;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    /// Switch to a different scenario variant. Only applies while no
    /// run is active.
    SelectScenario { kind: ScenarioKind },
    /// Start a run with the given drone count (clamped to the allowed
    /// range). Ignored while a run is already active.
    Start { drone_count: u32 },
    /// Discard the current run: despawn all drones, clear the footprint
    /// log, return to Inactive.
    Reset,
}
