//! Navigation decision logic for SKYJACK.
//!
//! Implements the per-drone movement state machine and the detour
//! routing used after a navigation takeover. Pure functions over plain
//! data — no ECS dependency.

pub mod fsm;
pub mod route;

pub use skyjack_core as core;

#[cfg(test)]
mod tests;
