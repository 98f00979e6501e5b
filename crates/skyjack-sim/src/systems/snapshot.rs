//! Snapshot system: queries the ECS world and builds a complete
//! ScenarioSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skyjack_core::components::{NavState, PathTrail, ReportedTrack};
use skyjack_core::enums::{ScenarioKind, ScenarioPhase};
use skyjack_core::events::Footprint;
use skyjack_core::state::{DroneView, ScenarioSnapshot, TelemetryView};
use skyjack_core::types::{Position, SimTime};

use crate::scenario::ScenarioConfig;

/// Build a complete ScenarioSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: ScenarioPhase,
    scenario: &ScenarioConfig,
    footprints: &[Footprint],
) -> ScenarioSnapshot {
    let mut drones: Vec<DroneView> = world
        .query::<(&NavState, &Position, &PathTrail, Option<&ReportedTrack>)>()
        .iter()
        .map(|(_, (nav, pos, trail, reported))| DroneView {
            id: nav.id,
            position: *pos,
            status: nav.status,
            trail: trail.positions.clone(),
            reported: reported.map(|r| TelemetryView {
                position: r.position,
                trail: r.trail.clone(),
            }),
        })
        .collect();

    drones.sort_by_key(|d| d.id);

    ScenarioSnapshot {
        time: *time,
        kind: scenario.kind,
        phase,
        status_line: status_line(phase, scenario.kind).to_string(),
        layout: scenario.layout,
        drones,
        footprints: footprints.to_vec(),
    }
}

/// Human-readable status line for the header strip.
fn status_line(phase: ScenarioPhase, kind: ScenarioKind) -> &'static str {
    match phase {
        ScenarioPhase::Inactive => "Standing by — launch a scenario",
        ScenarioPhase::NormalFlight => "Drones en route to the objective",
        ScenarioPhase::AttackActive => match kind {
            ScenarioKind::TelemetryInject => {
                "Telemetry injection active — ground station sees a falsified track"
            }
            _ => "Takeover in progress — drones diverting to the safe zone",
        },
        ScenarioPhase::Secured => "All drones secured — scenario complete",
    }
}
