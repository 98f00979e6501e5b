//! Scenario engine — the core of the demo.
//!
//! `ScenarioEngine` owns the hecs ECS world, processes operator
//! commands, runs all systems, and produces `ScenarioSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyjack_core::commands::OperatorCommand;
use skyjack_core::components::NavState;
use skyjack_core::enums::{DroneStatus, FootprintCategory, ScenarioPhase};
use skyjack_core::events::Footprint;
use skyjack_core::state::ScenarioSnapshot;
use skyjack_core::types::SimTime;

use crate::scenario::ScenarioConfig;
use crate::systems;
use crate::world_setup;

/// Configuration for creating a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Scenario variant to run.
    pub scenario: ScenarioConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario: ScenarioConfig::redirect(),
        }
    }
}

/// The scenario engine. Owns the ECS world and all run state.
pub struct ScenarioEngine {
    world: World,
    time: SimTime,
    phase: ScenarioPhase,
    scenario: ScenarioConfig,
    rng: ChaCha8Rng,
    next_drone_id: u32,
    command_queue: VecDeque<OperatorCommand>,
    footprints: Vec<Footprint>,
}

impl ScenarioEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: ScenarioPhase::default(),
            scenario: config.scenario,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_drone_id: 0,
            command_queue: VecDeque::new(),
            footprints: Vec::new(),
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Ticks outside a running phase mutate nothing — a tick
    /// fired after reset, or after the scenario is secured, is a no-op.
    pub fn tick(&mut self) -> ScenarioSnapshot {
        self.process_commands();

        if self.phase.is_running() {
            self.run_systems();
            self.update_phase();
            self.time.advance();
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.scenario,
            &self.footprints,
        )
    }

    /// Get the current scenario phase.
    pub fn phase(&self) -> ScenarioPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the footprint log for the current run.
    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    /// Get the active scenario configuration.
    pub fn scenario(&self) -> &ScenarioConfig {
        &self.scenario
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SelectScenario { kind } => {
                if self.phase == ScenarioPhase::Inactive {
                    self.scenario = ScenarioConfig::for_kind(kind);
                }
            }
            OperatorCommand::Start { drone_count } => {
                // Starting an already-active run is a no-op, not a
                // second interleaved run.
                if self.phase == ScenarioPhase::Inactive {
                    let count = self.scenario.clamp_drone_count(drone_count);
                    self.time = SimTime::default();
                    world_setup::spawn_drones(
                        &mut self.world,
                        &mut self.rng,
                        &self.scenario,
                        &mut self.next_drone_id,
                        count,
                    );
                    self.phase = ScenarioPhase::NormalFlight;
                    self.footprints.push(Footprint::new(
                        FootprintCategory::Info,
                        format!("{count} drone(s) launched toward the target zone"),
                        &self.time,
                    ));
                }
            }
            OperatorCommand::Reset => {
                self.world.clear();
                self.footprints.clear();
                self.phase = ScenarioPhase::Inactive;
                self.time = SimTime::default();
            }
        }
    }

    /// Run all systems in order. The attack trigger runs before
    /// movement, so detection sees each drone's pre-movement position.
    fn run_systems(&mut self) {
        // 1. Attack trigger (fence check or timed injection)
        systems::detection::run(
            &mut self.world,
            &self.scenario,
            &self.time,
            &mut self.footprints,
        );
        // 2. Movement + safe-zone arrival
        systems::navigation::run(
            &mut self.world,
            &self.scenario,
            &self.time,
            &mut self.footprints,
        );
        // 3. Reported (spoofed) track
        systems::telemetry::run(&mut self.world, &self.scenario, &mut self.rng);
        // 4. Trail recording
        systems::trail::run(&mut self.world);
    }

    /// Advance the scenario phase from aggregate drone status.
    /// Strictly forward; each transition fires once.
    fn update_phase(&mut self) {
        let mut total = 0u32;
        let mut normal = 0u32;
        let mut terminal = 0u32;
        {
            let mut query = self.world.query::<&NavState>();
            for (_, nav) in query.iter() {
                total += 1;
                match nav.status {
                    DroneStatus::Normal => normal += 1,
                    DroneStatus::Safe => terminal += 1,
                    DroneStatus::Redirected => {}
                }
            }
        }

        if self.phase == ScenarioPhase::NormalFlight && normal < total {
            self.phase = ScenarioPhase::AttackActive;
            self.footprints.push(Footprint::new(
                FootprintCategory::Info,
                "Attack in progress — drone navigation is compromised",
                &self.time,
            ));
        }

        if self.phase == ScenarioPhase::AttackActive && total > 0 && terminal == total {
            self.phase = ScenarioPhase::Secured;
            self.footprints.push(Footprint::new(
                FootprintCategory::Info,
                format!("Scenario complete — {total} drone(s) recovered to the safe zone"),
                &self.time,
            ));
        }
    }
}
