//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Stage ---

/// Stage width in stage units (matches the render surface aspect).
pub const STAGE_WIDTH: f64 = 1000.0;

/// Stage height in stage units.
pub const STAGE_HEIGHT: f64 = 650.0;

// --- Drones ---

/// Distance a drone covers per tick (stage units).
pub const DRONE_STEP: f64 = 1.5;

/// Minimum drones per run.
pub const MIN_DRONES: u32 = 1;

/// Maximum drones per run.
pub const MAX_DRONES: u32 = 20;

/// A drone has reached an intermediate detour waypoint when within
/// this multiple of the step size.
pub const WAYPOINT_ARRIVAL_FACTOR: f64 = 2.0;

// --- Detection tower ---

/// Default tower center x.
pub const TOWER_X: f64 = 500.0;

/// Default tower center y.
pub const TOWER_Y: f64 = 325.0;

/// Radius of the tower's no-fly core (stage units).
pub const TOWER_CORE_RADIUS: f64 = 60.0;

/// Outer detection fence radius (stage units).
pub const TOWER_FENCE_RADIUS: f64 = 300.0;

/// Extra clearance added to the tower core when testing whether a
/// direct path to the safe zone is blocked.
pub const PATH_BLOCK_BUFFER: f64 = 40.0;

/// Distance from the tower center to the flanking detour points,
/// measured past the core radius.
pub const DETOUR_CLEARANCE: f64 = 50.0;

// --- Zones ---

/// Default target zone center.
pub const TARGET_ZONE_X: f64 = 920.0;
pub const TARGET_ZONE_Y: f64 = 325.0;

/// Default target zone size (diameter, stage units).
pub const TARGET_ZONE_SIZE: f64 = 80.0;

/// Default safe zone center.
pub const SAFE_ZONE_X: f64 = 120.0;
pub const SAFE_ZONE_Y: f64 = 560.0;

/// Default safe zone size (diameter, stage units). Arrival counts at
/// half this distance from the center.
pub const SAFE_ZONE_SIZE: f64 = 90.0;

// --- Telemetry injection ---

/// Simulated seconds of nominal flight before the injection fires.
pub const HIJACK_DELAY_SECS: f64 = 6.0;

/// Jitter amplitude applied to the falsified reported track (stage units).
pub const TELEMETRY_JITTER: f64 = 6.0;
