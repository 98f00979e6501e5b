//! Reported-track system for the telemetry-injection scenario.
//!
//! The reported track keeps following the flight plan regardless of
//! where the real drone is, with seeded jitter added once the injection
//! is active — the visual signature of falsified telemetry.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyjack_core::components::{FlightPlan, NavState, ReportedTrack};
use skyjack_core::constants::{DRONE_STEP, TELEMETRY_JITTER};
use skyjack_core::enums::DroneStatus;

use skyjack_guidance::route::advance_along_plan;

use crate::scenario::ScenarioConfig;

/// Advance all reported tracks along their flight plans.
pub fn run(world: &mut World, scenario: &ScenarioConfig, rng: &mut ChaCha8Rng) {
    for (_entity, (nav, plan, reported)) in
        world.query_mut::<(&NavState, &FlightPlan, &mut ReportedTrack)>()
    {
        let (mut position, plan_index) = advance_along_plan(
            reported.position,
            &plan.waypoints,
            reported.plan_index,
            DRONE_STEP,
        );

        if scenario.jitter_enabled && nav.status != DroneStatus::Normal {
            position.x += rng.gen_range(-TELEMETRY_JITTER..=TELEMETRY_JITTER);
            position.y += rng.gen_range(-TELEMETRY_JITTER..=TELEMETRY_JITTER);
        }

        reported.position = position;
        reported.plan_index = plan_index;
        reported.trail.push(position);
    }
}
