//! Simulation Engine
//!
//! Main trial loop integrating all components:
//! - Permutation generation (one fresh bijection per trial)
//! - Strategy evaluation (looped and random, per prisoner)
//! - Aggregation (per-strategy group success counters)
//!
//! # Architecture
//!
//! ```text
//! For each trial t in [1, iteration_count]:
//! 1. Draw one random permutation (shared by all looped-strategy checks)
//! 2. For each prisoner: evaluate looped strategy against the shared
//!    permutation, evaluate random strategy with fresh randomness
//! 3. Drop a strategy's trial flag on its first prisoner failure;
//!    stop the prisoner loop once both flags are down
//! 4. Bump the counter of every strategy whose flag survived
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one seeded xorshift64* generator.
//! Same seed + same config = identical counts (deterministic replay).
//!
//! # Example
//!
//! ```
//! use prisoner_simulator_core_rs::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     prisoner_count: 100,
//!     iteration_count: 500,
//!     rng_seed: 12345,
//! };
//!
//! let simulation = Simulation::new(config).unwrap();
//! let result = simulation.run();
//!
//! assert_eq!(result.iteration_count, 500);
//! assert!(result.smart_success_count <= 500);
//! ```

use thiserror::Error;

use crate::models::outcome::{SimulationResult, TrialOutcome};
use crate::models::permutation::Permutation;
use crate::rng::RngManager;
use crate::strategy::{LoopedStrategy, RandomStrategy, SearchStrategy};

// ============================================================================
// Configuration
// ============================================================================

/// Complete simulation configuration
///
/// Read-only for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of prisoners (and of boxes)
    pub prisoner_count: usize,

    /// Number of independent trials to run
    pub iteration_count: usize,

    /// RNG seed for deterministic simulation
    pub rng_seed: u64,
}

impl SimulationConfig {
    /// Maximum boxes a single prisoner may open: floor(prisoner_count / 2)
    ///
    /// # Example
    /// ```
    /// use prisoner_simulator_core_rs::SimulationConfig;
    ///
    /// let config = SimulationConfig {
    ///     prisoner_count: 7,
    ///     iteration_count: 1,
    ///     rng_seed: 0,
    /// };
    /// assert_eq!(config.attempt_limit(), 3);
    /// ```
    pub fn attempt_limit(&self) -> usize {
        self.prisoner_count / 2
    }
}

/// Simulation error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// ============================================================================
// Simulation
// ============================================================================

/// Main engine owning the trial loop and the aggregate counters
///
/// Trials are driven one at a time via [`Simulation::run_trial`] (so a
/// front-end can report progress between trials) or all at once via
/// [`Simulation::run`]. Counters only ever increase by whole-trial group
/// success and are bounded by `iteration_count`.
#[derive(Debug)]
pub struct Simulation {
    /// Read-only run configuration
    config: SimulationConfig,

    /// Deterministic RNG (sole source of randomness)
    rng: RngManager,

    /// Cycle-following strategy shared by all prisoners
    looped: LoopedStrategy,

    /// Random-subset strategy shared by all prisoners
    random: RandomStrategy,

    /// Trials completed so far
    trials_run: usize,

    /// Trials where the looped strategy freed the whole group
    smart_success_count: usize,

    /// Trials where the random strategy freed the whole group
    fool_success_count: usize,
}

impl Simulation {
    /// Create a new simulation from configuration
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidConfig` if `prisoner_count` or
    /// `iteration_count` is zero. Rejecting `iteration_count == 0` up front
    /// keeps the final percentages well-defined (they divide by it).
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        if config.prisoner_count == 0 {
            return Err(SimulationError::InvalidConfig(
                "prisoner_count must be positive".to_string(),
            ));
        }
        if config.iteration_count == 0 {
            return Err(SimulationError::InvalidConfig(
                "iteration_count must be positive".to_string(),
            ));
        }

        let rng = RngManager::new(config.rng_seed);
        Ok(Self {
            config,
            rng,
            looped: LoopedStrategy::new(),
            random: RandomStrategy::new(),
            trials_run: 0,
            smart_success_count: 0,
            fool_success_count: 0,
        })
    }

    /// Run configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Trials completed so far
    pub fn trials_run(&self) -> usize {
        self.trials_run
    }

    /// True once all configured trials have run
    pub fn is_complete(&self) -> bool {
        self.trials_run >= self.config.iteration_count
    }

    /// Run one trial and update the aggregate counters
    ///
    /// Draws a fresh permutation shared by every prisoner's looped-strategy
    /// check; the random strategy draws its own ordering per prisoner. The
    /// prisoner loop stops early once both strategies have already failed
    /// the trial, which cannot affect the counts: a failed flag stays down.
    ///
    /// # Panics
    /// Panics if called after all configured trials have run.
    pub fn run_trial(&mut self) -> TrialOutcome {
        assert!(!self.is_complete(), "all configured trials already run");

        let boxes = Permutation::random(self.config.prisoner_count, &mut self.rng);
        let attempt_limit = self.config.attempt_limit();

        let mut smart_freed = true;
        let mut fool_freed = true;

        for prisoner in 0..self.config.prisoner_count {
            if !self
                .looped
                .finds_own_number(prisoner, &boxes, attempt_limit, &mut self.rng)
            {
                smart_freed = false;
            }
            if !self
                .random
                .finds_own_number(prisoner, &boxes, attempt_limit, &mut self.rng)
            {
                fool_freed = false;
            }

            if !smart_freed && !fool_freed {
                break;
            }
        }

        if smart_freed {
            self.smart_success_count += 1;
        }
        if fool_freed {
            self.fool_success_count += 1;
        }
        self.trials_run += 1;

        TrialOutcome {
            smart_freed,
            fool_freed,
        }
    }

    /// Drive all remaining trials to completion and return the final tally
    pub fn run(mut self) -> SimulationResult {
        while !self.is_complete() {
            self.run_trial();
        }
        self.result()
    }

    /// Aggregate counts so far
    ///
    /// Final once [`Simulation::is_complete`] returns true.
    pub fn result(&self) -> SimulationResult {
        SimulationResult {
            smart_success_count: self.smart_success_count,
            fool_success_count: self.fool_success_count,
            iteration_count: self.config.iteration_count,
        }
    }
}

// ============================================================================
// Single call contract
// ============================================================================

/// Run a full simulation in one call
///
/// # Errors
/// Returns `SimulationError::InvalidConfig` for a zero `prisoner_count` or
/// `iteration_count`.
///
/// # Example
///
/// ```
/// use prisoner_simulator_core_rs::run_simulation;
///
/// let result = run_simulation(100, 200, 42).unwrap();
/// assert_eq!(result.iteration_count, 200);
/// ```
pub fn run_simulation(
    prisoner_count: usize,
    iteration_count: usize,
    rng_seed: u64,
) -> Result<SimulationResult, SimulationError> {
    let simulation = Simulation::new(SimulationConfig {
        prisoner_count,
        iteration_count,
        rng_seed,
    })?;
    Ok(simulation.run())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(prisoner_count: usize, iteration_count: usize) -> SimulationConfig {
        SimulationConfig {
            prisoner_count,
            iteration_count,
            rng_seed: 12345,
        }
    }

    #[test]
    fn test_rejects_zero_prisoners() {
        let err = Simulation::new(config(0, 10)).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidConfig("prisoner_count must be positive".to_string())
        );
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err = Simulation::new(config(10, 0)).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidConfig("iteration_count must be positive".to_string())
        );
    }

    #[test]
    fn test_attempt_limit_floors() {
        assert_eq!(config(1, 1).attempt_limit(), 0);
        assert_eq!(config(2, 1).attempt_limit(), 1);
        assert_eq!(config(99, 1).attempt_limit(), 49);
        assert_eq!(config(100, 1).attempt_limit(), 50);
    }

    #[test]
    #[should_panic(expected = "all configured trials already run")]
    fn test_run_trial_past_completion_panics() {
        let mut simulation = Simulation::new(config(4, 1)).unwrap();
        simulation.run_trial();
        simulation.run_trial();
    }
}
