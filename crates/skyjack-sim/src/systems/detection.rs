//! Attack trigger system.
//!
//! Flips Normal drones to Redirected, either geometrically (the drone
//! crosses the tower's detection fence) or on a simulated-time
//! threshold (the telemetry-injection scenario). The detour decision
//! fires here, at the moment of the flip, so the footprint log records
//! exactly one detection entry per drone.

use hecs::World;

use skyjack_core::components::NavState;
use skyjack_core::enums::{DroneStatus, FootprintCategory};
use skyjack_core::events::Footprint;
use skyjack_core::types::{Position, SimTime};

use skyjack_guidance::route::divert_route;

use crate::scenario::ScenarioConfig;

/// Run the attack trigger for all drones still in Normal status.
pub fn run(
    world: &mut World,
    scenario: &ScenarioConfig,
    time: &SimTime,
    footprints: &mut Vec<Footprint>,
) {
    match scenario.hijack_after_secs {
        Some(delay) => run_timed(world, scenario, time, footprints, delay),
        None => run_fence(world, scenario, time, footprints),
    }
}

/// Geometric trigger: a Normal drone within the outer fence radius of
/// the tower is detected and taken over.
fn run_fence(
    world: &mut World,
    scenario: &ScenarioConfig,
    time: &SimTime,
    footprints: &mut Vec<Footprint>,
) {
    let tower = scenario.layout.tower;

    for (_entity, (nav, pos)) in world.query_mut::<(&mut NavState, &Position)>() {
        if nav.status != DroneStatus::Normal {
            continue;
        }
        if pos.range_to(&tower.center) > tower.fence_radius {
            continue;
        }

        nav.status = DroneStatus::Redirected;
        nav.nav_target = divert_route(*pos, &scenario.layout, scenario.detour_enabled);
        footprints.push(Footprint::new(
            FootprintCategory::Attack,
            format!(
                "Drone {} crossed the detection fence — navigation takeover initiated",
                nav.id
            ),
            time,
        ));
    }
}

/// Timed trigger: once the injection delay elapses, every Normal drone
/// accepts the spoofed command and diverts.
fn run_timed(
    world: &mut World,
    scenario: &ScenarioConfig,
    time: &SimTime,
    footprints: &mut Vec<Footprint>,
    delay: f64,
) {
    if time.elapsed_secs < delay {
        return;
    }

    let mut flipped = false;
    for (_entity, (nav, pos)) in world.query_mut::<(&mut NavState, &Position)>() {
        if nav.status != DroneStatus::Normal {
            continue;
        }

        nav.status = DroneStatus::Redirected;
        nav.nav_target = divert_route(*pos, &scenario.layout, scenario.detour_enabled);
        flipped = true;
        footprints.push(Footprint::new(
            FootprintCategory::Attack,
            format!(
                "Drone {} accepted an injected command — diverting off its flight plan",
                nav.id
            ),
            time,
        ));
    }

    if flipped {
        footprints.push(Footprint::new(
            FootprintCategory::Spoof,
            "Falsified telemetry injected — the ground station still sees a nominal track",
            time,
        ));
    }
}
