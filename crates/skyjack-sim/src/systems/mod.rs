//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! in the engine.

pub mod detection;
pub mod navigation;
pub mod snapshot;
pub mod telemetry;
pub mod trail;
