//! Scenario loop thread — runs the engine at 30Hz and publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot
//! is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyjack_core::constants::TICK_RATE;
use skyjack_sim::engine::{ScenarioEngine, SimConfig};

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Handle to a running scenario loop thread.
///
/// Dropping the handle shuts the thread down.
pub struct ScenarioLoopHandle {
    command_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: SharedSnapshot,
    join_handle: Option<JoinHandle<()>>,
}

impl ScenarioLoopHandle {
    /// Forward an operator command to the engine. Returns false if the
    /// loop thread has already exited.
    pub fn send(&self, command: skyjack_core::commands::OperatorCommand) -> bool {
        self.command_tx.send(LoopCommand::Operator(command)).is_ok()
    }

    /// Latest snapshot published by the loop, if any tick has run yet.
    pub fn latest_snapshot(&self) -> Option<skyjack_core::state::ScenarioSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Shared snapshot slot, for callers that poll on their own cadence.
    pub fn snapshot_slot(&self) -> SharedSnapshot {
        Arc::clone(&self.latest_snapshot)
    }

    /// Stop the loop thread and wait for it to exit.
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ScenarioLoopHandle {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

/// Spawn the scenario loop in a new thread.
pub fn spawn_scenario_loop(config: SimConfig) -> std::io::Result<ScenarioLoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let snapshot_slot = Arc::clone(&latest_snapshot);

    let join_handle = std::thread::Builder::new()
        .name("skyjack-scenario-loop".into())
        .spawn(move || {
            run_scenario_loop(config, command_rx, &snapshot_slot);
        })?;

    Ok(ScenarioLoopHandle {
        command_tx,
        latest_snapshot,
        join_handle: Some(join_handle),
    })
}

/// The loop body. Runs until Shutdown or channel disconnect.
fn run_scenario_loop(
    config: SimConfig,
    command_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<skyjack_core::state::ScenarioSnapshot>>,
) {
    let mut engine = ScenarioEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine gates ticking on phase)
        let snapshot = engine.tick();

        // 3. Publish for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
