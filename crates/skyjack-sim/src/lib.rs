//! Simulation engine for SKYJACK.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces ScenarioSnapshots for the renderer.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use skyjack_core as core;
pub use engine::ScenarioEngine;
