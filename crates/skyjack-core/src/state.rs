//! Scenario snapshot — the complete visible state handed to the
//! renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{DroneStatus, ScenarioKind, ScenarioPhase};
use crate::events::Footprint;
use crate::types::{Position, SimTime};
use crate::zones::ZoneLayout;

/// Complete scenario state for one tick. The renderer maps this to
/// icons, colors, and polylines; the core never depends on any of that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    pub time: SimTime,
    pub kind: ScenarioKind,
    pub phase: ScenarioPhase,
    /// Human-readable status line for the header strip.
    pub status_line: String,
    pub layout: ZoneLayout,
    pub drones: Vec<DroneView>,
    /// The full ordered footprint log for the run.
    pub footprints: Vec<Footprint>,
}

/// One drone as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub id: u32,
    pub position: Position,
    pub status: DroneStatus,
    /// Visited true positions, oldest first.
    pub trail: Vec<Position>,
    /// The falsified telemetry track, when the scenario simulates one.
    pub reported: Option<TelemetryView>,
}

/// The reported (spoofed) track for the injection scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryView {
    pub position: Position,
    pub trail: Vec<Position>,
}

impl Default for ScenarioSnapshot {
    fn default() -> Self {
        Self {
            time: SimTime::default(),
            kind: ScenarioKind::default(),
            phase: ScenarioPhase::default(),
            status_line: String::new(),
            layout: ZoneLayout::standard(),
            drones: Vec::new(),
            footprints: Vec::new(),
        }
    }
}
