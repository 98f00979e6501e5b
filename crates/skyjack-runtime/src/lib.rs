//! SKYJACK runtime.
//!
//! Hosts the scenario engine on a dedicated 30Hz thread and exposes a
//! handle for queueing operator commands and polling the latest
//! snapshot. Any presentation layer sits entirely on the other side of
//! that handle.

pub mod scenario_loop;
pub mod state;

pub use scenario_loop::{spawn_scenario_loop, ScenarioLoopHandle};
pub use state::{LoopCommand, SharedSnapshot};
