//! Prisoner Simulator Core - Rust Engine
//!
//! Monte Carlo simulator for the "100 prisoners problem": N prisoners, N
//! boxes hiding a random permutation of their numbers, each prisoner may open
//! at most floor(N/2) boxes. Two box-search strategies are compared over many
//! independent trials.
//!
//! # Architecture
//!
//! - **models**: Domain types (Permutation, TrialOutcome, SimulationResult)
//! - **strategy**: Box-search strategies (looped cycle-following, random)
//! - **orchestrator**: Main trial loop and result aggregation
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG, no global state)
//! 2. Every permutation is a bijection on [0, n)
//! 3. Success counters only ever increase by whole-trial group success

// Module declarations
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod strategy;

// Re-exports for convenience
pub use models::{
    outcome::{SimulationResult, TrialOutcome},
    permutation::{Permutation, PermutationError},
};
pub use orchestrator::{run_simulation, Simulation, SimulationConfig, SimulationError};
pub use rng::RngManager;
pub use strategy::{LoopedStrategy, RandomStrategy, SearchStrategy};
