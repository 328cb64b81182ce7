//! Orchestrator - main trial loop
//!
//! Runs the configured number of independent trials and aggregates group
//! success counts per strategy.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{run_simulation, Simulation, SimulationConfig, SimulationError};
