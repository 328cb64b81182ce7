//! Looped ("smart") strategy
//!
//! The prisoner starts at the box whose position matches their own number
//! and keeps following the number found inside. Because the permutation is
//! a bijection, this walk traces the cycle containing the starting box, and
//! that cycle is guaranteed to contain the prisoner's number. The prisoner
//! succeeds exactly when the cycle is no longer than the attempt limit.

use super::SearchStrategy;
use crate::models::permutation::Permutation;
use crate::rng::RngManager;

/// Cycle-following strategy: open box `prisoner`, then the box named by its
/// content, and so on
///
/// Deterministic given the permutation; never consumes randomness.
///
/// # Example
///
/// ```
/// use prisoner_simulator_core_rs::strategy::SearchStrategy;
/// use prisoner_simulator_core_rs::{LoopedStrategy, Permutation, RngManager};
///
/// let mut rng = RngManager::new(1);
/// let boxes = Permutation::from_vec(vec![1, 0, 3, 2]).unwrap(); // two 2-cycles
///
/// let strategy = LoopedStrategy::new();
/// assert!(strategy.finds_own_number(0, &boxes, 2, &mut rng));
/// assert!(!strategy.finds_own_number(0, &boxes, 1, &mut rng));
/// ```
#[derive(Debug)]
pub struct LoopedStrategy;

impl LoopedStrategy {
    /// Create new looped strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoopedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for LoopedStrategy {
    fn finds_own_number(
        &self,
        prisoner: usize,
        boxes: &Permutation,
        attempt_limit: usize,
        _rng: &mut RngManager,
    ) -> bool {
        // Start at the box matching the prisoner's own number
        let mut current = prisoner;
        for _ in 0..attempt_limit {
            let found = boxes.get(current);
            if found == prisoner {
                return true;
            }
            current = found; // follow the cycle to the next box
        }
        false
    }
}
