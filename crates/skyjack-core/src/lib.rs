//! Core types and definitions for the SKYJACK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, footprint events, zone geometry,
//! and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
pub mod zones;

#[cfg(test)]
mod tests;
