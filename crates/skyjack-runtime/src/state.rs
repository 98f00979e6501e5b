//! Shared state between the loop thread and its callers.

use std::sync::{Arc, Mutex};

use skyjack_core::commands::OperatorCommand;
use skyjack_core::state::ScenarioSnapshot;

/// Commands sent from callers to the scenario loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the scenario engine.
    Operator(OperatorCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, updated by the loop thread after each tick.
/// `None` until the first tick has run.
pub type SharedSnapshot = Arc<Mutex<Option<ScenarioSnapshot>>>;
