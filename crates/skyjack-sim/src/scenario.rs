//! Scenario definitions — the three demo variants as configurations of
//! one engine, not three copies of the tick logic.

use skyjack_core::constants::*;
use skyjack_core::enums::ScenarioKind;
use skyjack_core::types::Position;
use skyjack_core::zones::ZoneLayout;

/// Configuration for a scenario variant. Geometry and motion constants
/// are fixed for the run; only the drone count comes from the operator.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub kind: ScenarioKind,
    pub layout: ZoneLayout,
    /// Whether blocked paths route via the flanking detour points.
    pub detour_enabled: bool,
    /// Whether the reported track jitters once the injection is active.
    pub jitter_enabled: bool,
    /// Simulated seconds before the telemetry injection fires; `None`
    /// means takeover is triggered geometrically by the detection fence.
    pub hijack_after_secs: Option<f64>,
    /// Fixed spawn point for every drone; `None` spawns in the random
    /// band on the west edge of the stage.
    pub fixed_start: Option<Position>,
    /// Random spawn band (inclusive x and y ranges), used when no fixed
    /// start is set.
    pub spawn_x: (f64, f64),
    pub spawn_y: (f64, f64),
    /// Ordered waypoints for the injection scenario; empty for the
    /// redirect variants.
    pub flight_plan: Vec<Position>,
}

impl ScenarioConfig {
    /// Build the configuration for a scenario variant.
    pub fn for_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Redirect => Self::redirect(),
            ScenarioKind::RedirectDetour => Self::redirect_with_detour(),
            ScenarioKind::TelemetryInject => Self::telemetry_inject(),
        }
    }

    /// Plain redirection: detected drones fly straight to the safe zone.
    pub fn redirect() -> Self {
        Self {
            kind: ScenarioKind::Redirect,
            layout: ZoneLayout::standard(),
            detour_enabled: false,
            jitter_enabled: false,
            hijack_after_secs: None,
            fixed_start: None,
            spawn_x: (20.0, 60.0),
            spawn_y: (80.0, 570.0),
            flight_plan: Vec::new(),
        }
    }

    /// Redirection with detour waypoints around the tower core.
    pub fn redirect_with_detour() -> Self {
        Self {
            kind: ScenarioKind::RedirectDetour,
            detour_enabled: true,
            ..Self::redirect()
        }
    }

    /// Timed telemetry injection: a single drone following a waypoint
    /// plan, with a separately simulated falsified track.
    pub fn telemetry_inject() -> Self {
        Self {
            kind: ScenarioKind::TelemetryInject,
            jitter_enabled: true,
            hijack_after_secs: Some(HIJACK_DELAY_SECS),
            fixed_start: Some(Position::new(60.0, 100.0)),
            flight_plan: vec![
                Position::new(260.0, 170.0),
                Position::new(450.0, 240.0),
                Position::new(650.0, 290.0),
                Position::new(TARGET_ZONE_X, TARGET_ZONE_Y),
            ],
            ..Self::redirect()
        }
    }

    /// Clamp an operator-requested drone count to the allowed range.
    /// The injection scenario always runs exactly one drone.
    pub fn clamp_drone_count(&self, requested: u32) -> u32 {
        if self.kind == ScenarioKind::TelemetryInject {
            return 1;
        }
        requested.clamp(MIN_DRONES, MAX_DRONES)
    }
}
