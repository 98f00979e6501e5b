//! Per-drone movement state machine.
//!
//! Computes one tick of movement and any resulting status transition
//! for a single drone. Operates on plain data; the sim crate maps ECS
//! components in and out.

use skyjack_core::constants::WAYPOINT_ARRIVAL_FACTOR;
use skyjack_core::enums::DroneStatus;
use skyjack_core::geometry::steer_towards;
use skyjack_core::types::Position;
use skyjack_core::zones::ZoneLayout;

/// Input to the navigation FSM for a single drone.
pub struct NavContext<'a> {
    pub status: DroneStatus,
    pub position: Position,
    /// Intermediate detour waypoint, if one was assigned at takeover.
    pub nav_target: Option<Position>,
    pub layout: &'a ZoneLayout,
    /// Distance covered per tick.
    pub step: f64,
}

/// Output from the navigation FSM.
pub struct NavUpdate {
    pub position: Position,
    pub nav_target: Option<Position>,
    pub status: DroneStatus,
    /// True on the tick the drone arrives in the safe zone.
    pub secured: bool,
}

/// Advance one drone by one tick.
///
/// Normal drones head for the target zone center. Redirected drones
/// head for their detour waypoint if one is set, otherwise straight for
/// the safe zone center; reaching the waypoint clears it, and reaching
/// the safe zone flips the drone to Safe. Safe drones do not move.
pub fn advance(ctx: &NavContext) -> NavUpdate {
    let unchanged = NavUpdate {
        position: ctx.position,
        nav_target: ctx.nav_target,
        status: ctx.status,
        secured: false,
    };

    match ctx.status {
        DroneStatus::Safe => unchanged,
        DroneStatus::Normal => {
            let position = steer_towards(ctx.position, ctx.layout.target.center, ctx.step);
            NavUpdate {
                position,
                ..unchanged
            }
        }
        DroneStatus::Redirected => advance_redirected(ctx),
    }
}

fn advance_redirected(ctx: &NavContext) -> NavUpdate {
    let destination = ctx.nav_target.unwrap_or(ctx.layout.safe.center);
    let position = steer_towards(ctx.position, destination, ctx.step);

    // Reaching the intermediate waypoint switches to the final approach.
    let mut nav_target = ctx.nav_target;
    if let Some(wp) = nav_target {
        if position.range_to(&wp) <= WAYPOINT_ARRIVAL_FACTOR * ctx.step {
            nav_target = None;
        }
    }

    // Arrival inside the safe zone is terminal.
    if position.range_to(&ctx.layout.safe.center) < ctx.layout.safe_arrival_radius() {
        return NavUpdate {
            position,
            nav_target: None,
            status: DroneStatus::Safe,
            secured: true,
        };
    }

    NavUpdate {
        position,
        nav_target,
        status: DroneStatus::Redirected,
        secured: false,
    }
}
