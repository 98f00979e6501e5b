//! Trail recording system.
//!
//! Appends each drone's true position to its trail after movement. The
//! trail is never pruned during a run; growth is bounded by run length.

use hecs::World;

use skyjack_core::components::PathTrail;
use skyjack_core::types::Position;

/// Record the current position of every drone.
pub fn run(world: &mut World) {
    for (_entity, (pos, trail)) in world.query_mut::<(&Position, &mut PathTrail)>() {
        trail.positions.push(*pos);
    }
}
