//! Drone spawn factories for setting up the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyjack_core::components::{Drone, FlightPlan, NavState, PathTrail, ReportedTrack};
use skyjack_core::enums::DroneStatus;
use skyjack_core::types::Position;

use crate::scenario::ScenarioConfig;

/// Spawn `count` drones for a run.
pub fn spawn_drones(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scenario: &ScenarioConfig,
    next_id: &mut u32,
    count: u32,
) {
    for _ in 0..count {
        spawn_drone(world, rng, scenario, next_id);
    }
}

/// Spawn a single drone in Normal status.
///
/// Uses the scenario's fixed start when set, otherwise a seeded-random
/// point in the spawn band. Injection scenarios additionally get a
/// flight plan and a reported track starting at the same point.
pub fn spawn_drone(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scenario: &ScenarioConfig,
    next_id: &mut u32,
) -> hecs::Entity {
    let id = *next_id;
    *next_id += 1;

    let position = match scenario.fixed_start {
        Some(p) => p,
        None => Position::new(
            rng.gen_range(scenario.spawn_x.0..=scenario.spawn_x.1),
            rng.gen_range(scenario.spawn_y.0..=scenario.spawn_y.1),
        ),
    };

    let nav = NavState {
        id,
        status: DroneStatus::Normal,
        nav_target: None,
    };

    let entity = world.spawn((
        Drone,
        position,
        nav,
        PathTrail {
            positions: vec![position],
        },
    ));

    if !scenario.flight_plan.is_empty() {
        let _ = world.insert(
            entity,
            (
                FlightPlan {
                    waypoints: scenario.flight_plan.clone(),
                    next: 0,
                },
                ReportedTrack {
                    position,
                    plan_index: 0,
                    trail: vec![position],
                },
            ),
        );
    }

    entity
}
