//! Detour routing and waypoint sequencing.

use skyjack_core::constants::PATH_BLOCK_BUFFER;
use skyjack_core::geometry::{segment_intersects_circle, steer_towards};
use skyjack_core::types::Position;
use skyjack_core::zones::ZoneLayout;

/// Decide the route to the safe zone at the moment of takeover.
///
/// Returns a detour waypoint when detours are enabled and the direct
/// segment to the safe zone center would cross the tower core (plus
/// clearance buffer); the nearer of the two flanking points is chosen.
/// Returns `None` when the drone can fly straight in.
pub fn divert_route(position: Position, layout: &ZoneLayout, detour_enabled: bool) -> Option<Position> {
    if !detour_enabled {
        return None;
    }

    let blocked = segment_intersects_circle(
        position,
        layout.safe.center,
        layout.tower.center,
        layout.tower.core_radius + PATH_BLOCK_BUFFER,
    );
    if !blocked {
        return None;
    }

    // Nearest-neighbor tie-break between the two flanks, not a search.
    let [a, b] = layout.detour_points;
    if position.range_to(&a) <= position.range_to(&b) {
        Some(a)
    } else {
        Some(b)
    }
}

/// Advance one step along an ordered waypoint list.
///
/// Moves toward `waypoints[next]`, bumping `next` once within one step
/// of it. Past the end of the list the position holds at the final
/// waypoint. Used by both the true track (before takeover) and the
/// reported track of the injection scenario.
pub fn advance_along_plan(
    position: Position,
    waypoints: &[Position],
    next: usize,
    step: f64,
) -> (Position, usize) {
    let Some(&wp) = waypoints.get(next) else {
        // Plan exhausted — hold position.
        return (position, next);
    };

    let new_position = steer_towards(position, wp, step);
    let new_next = if new_position.range_to(&wp) <= step {
        next + 1
    } else {
        next
    };
    (new_position, new_next)
}
