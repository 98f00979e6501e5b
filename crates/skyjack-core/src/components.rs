//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::DroneStatus;
use crate::types::Position;

/// Marks an entity as a drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drone;

/// Navigation state maintained by the update engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavState {
    /// Stable identifier for the drone's lifetime.
    pub id: u32,
    pub status: DroneStatus,
    /// Intermediate detour waypoint while redirected. `None` means head
    /// straight for the safe zone center.
    pub nav_target: Option<Position>,
}

/// Visited positions for trail rendering.
///
/// Append-only for the duration of a run — never pruned. Growth is
/// bounded only by run length, which is acceptable for a short-lived
/// animation but worth knowing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathTrail {
    pub positions: Vec<Position>,
}

/// Ordered waypoint list for the telemetry-injection scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPlan {
    pub waypoints: Vec<Position>,
    /// Index of the next waypoint to reach.
    pub next: usize,
}

/// The falsified telemetry track shown to the ground station.
///
/// Simulated separately from the true position: it keeps following the
/// flight plan (with jitter once the injection is active) while the
/// real drone diverges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedTrack {
    pub position: Position,
    /// Next waypoint index along the shared flight plan.
    pub plan_index: usize,
    pub trail: Vec<Position>,
}
