//! Movement system.
//!
//! Advances every drone one step via the guidance FSM; drones still on
//! a flight plan follow it waypoint by waypoint instead of heading
//! straight for the target zone center.

use hecs::World;

use skyjack_core::components::{FlightPlan, NavState};
use skyjack_core::constants::DRONE_STEP;
use skyjack_core::enums::{DroneStatus, FootprintCategory};
use skyjack_core::events::Footprint;
use skyjack_core::types::{Position, SimTime};

use skyjack_guidance::fsm::{advance, NavContext};
use skyjack_guidance::route::advance_along_plan;

use crate::scenario::ScenarioConfig;

/// Move all drones one step and record arrivals in the safe zone.
pub fn run(
    world: &mut World,
    scenario: &ScenarioConfig,
    time: &SimTime,
    footprints: &mut Vec<Footprint>,
) {
    for (_entity, (nav, pos, plan)) in
        world.query_mut::<(&mut NavState, &mut Position, Option<&mut FlightPlan>)>()
    {
        match (nav.status, plan) {
            (DroneStatus::Normal, Some(plan)) => {
                let (new_pos, next) =
                    advance_along_plan(*pos, &plan.waypoints, plan.next, DRONE_STEP);
                *pos = new_pos;
                plan.next = next;
            }
            _ => {
                let ctx = NavContext {
                    status: nav.status,
                    position: *pos,
                    nav_target: nav.nav_target,
                    layout: &scenario.layout,
                    step: DRONE_STEP,
                };
                let update = advance(&ctx);

                *pos = update.position;
                nav.nav_target = update.nav_target;
                nav.status = update.status;

                if update.secured {
                    footprints.push(Footprint::new(
                        FootprintCategory::Secure,
                        format!("Drone {} grounded inside the safe zone", nav.id),
                        time,
                    ));
                }
            }
        }
    }
}
