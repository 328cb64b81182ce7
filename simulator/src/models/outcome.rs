//! Trial outcomes and aggregated results

use serde::{Deserialize, Serialize};

/// Group outcome of a single trial, per strategy
///
/// A strategy's flag is true iff EVERY prisoner found their own number under
/// that strategy in this trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// All prisoners succeeded with the looped (cycle-following) strategy
    pub smart_freed: bool,

    /// All prisoners succeeded opening random boxes
    pub fool_freed: bool,
}

/// Final tally over all trials of a simulation run
///
/// # Example
/// ```
/// use prisoner_simulator_core_rs::SimulationResult;
///
/// let result = SimulationResult {
///     smart_success_count: 312,
///     fool_success_count: 0,
///     iteration_count: 1000,
/// };
/// assert_eq!(result.smart_success_rate(), 31.2);
/// assert_eq!(result.fool_success_rate(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Trials in which the looped strategy freed the whole group
    pub smart_success_count: usize,

    /// Trials in which the random strategy freed the whole group
    pub fool_success_count: usize,

    /// Total number of trials run
    pub iteration_count: usize,
}

impl SimulationResult {
    /// Group success percentage of the looped strategy, in [0, 100]
    pub fn smart_success_rate(&self) -> f64 {
        100.0 * self.smart_success_count as f64 / self.iteration_count as f64
    }

    /// Group success percentage of the random strategy, in [0, 100]
    pub fn fool_success_rate(&self) -> f64 {
        100.0 * self.fool_success_count as f64 / self.iteration_count as f64
    }
}
