//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Per-drone navigation status. Transitions are monotonic:
/// Normal → Redirected → Safe, never backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneStatus {
    /// Flying its own mission toward the target zone.
    #[default]
    Normal,
    /// Navigation taken over; steering toward the safe zone.
    Redirected,
    /// Landed in the safe zone. Terminal.
    Safe,
}

impl DroneStatus {
    /// Whether this status is terminal for the run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DroneStatus::Safe)
    }
}

/// Scenario variant. One engine, parameterized — not three copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Drones redirected straight to the safe zone on detection.
    #[default]
    Redirect,
    /// As above, plus detour waypoints when the tower blocks the path.
    RedirectDetour,
    /// Timed telemetry injection: one drone, true and reported tracks.
    TelemetryInject,
}

/// Top-level scenario phase. Strictly forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioPhase {
    /// No run active.
    #[default]
    Inactive,
    /// Drones en route, none detected yet.
    NormalFlight,
    /// At least one drone has left Normal status.
    AttackActive,
    /// Every drone reached a terminal status. Ticking halts.
    Secured,
}

impl ScenarioPhase {
    /// Whether the per-tick systems should run in this phase.
    pub fn is_running(&self) -> bool {
        matches!(self, ScenarioPhase::NormalFlight | ScenarioPhase::AttackActive)
    }
}

/// Footprint log entry category, used by the renderer for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootprintCategory {
    /// Run lifecycle and phase transitions.
    Info,
    /// Detection / takeover events.
    Attack,
    /// Falsified telemetry events.
    Spoof,
    /// Drone secured in the safe zone.
    Secure,
}
