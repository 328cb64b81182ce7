//! Random ("fool") strategy
//!
//! The prisoner ignores box contents entirely and opens a uniformly random
//! subset of boxes. A fresh random ordering is drawn for EVERY evaluation:
//! no two prisoners share box choices, and nothing carries over between
//! trials. The subset is the first `attempt_limit + 1` entries of that
//! ordering, capped at the number of boxes.

use super::SearchStrategy;
use crate::models::permutation::Permutation;
use crate::rng::RngManager;

/// Random-subset strategy: open `attempt_limit + 1` boxes drawn uniformly
/// without replacement
///
/// # Example
///
/// ```
/// use prisoner_simulator_core_rs::strategy::SearchStrategy;
/// use prisoner_simulator_core_rs::{Permutation, RandomStrategy, RngManager};
///
/// let mut rng = RngManager::new(1);
/// let boxes = Permutation::identity(8);
///
/// // Opening all 8 boxes (limit 7 → 8 openings) always succeeds
/// let strategy = RandomStrategy::new();
/// assert!(strategy.finds_own_number(3, &boxes, 7, &mut rng));
/// ```
#[derive(Debug)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Create new random strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for RandomStrategy {
    fn finds_own_number(
        &self,
        prisoner: usize,
        boxes: &Permutation,
        attempt_limit: usize,
        rng: &mut RngManager,
    ) -> bool {
        // Fresh random ordering per prisoner per trial; only its prefix is
        // opened. take() caps the opening count at the number of boxes when
        // attempt_limit + 1 exceeds it.
        let order = Permutation::random(boxes.len(), rng);
        order
            .as_slice()
            .iter()
            .take(attempt_limit + 1)
            .any(|&opened| opened == prisoner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_every_box_always_succeeds() {
        let mut rng = RngManager::new(99);
        let boxes = Permutation::identity(10);
        let strategy = RandomStrategy::new();

        // limit = box_count - 1 opens all boxes
        for prisoner in 0..10 {
            assert!(
                strategy.finds_own_number(prisoner, &boxes, 9, &mut rng),
                "prisoner {} must find their number when opening every box",
                prisoner
            );
        }
    }

    #[test]
    fn test_limit_beyond_box_count_is_capped() {
        let mut rng = RngManager::new(99);
        let boxes = Permutation::identity(4);
        let strategy = RandomStrategy::new();

        // attempt_limit + 1 > box_count: all boxes are considered, no panic
        for prisoner in 0..4 {
            assert!(strategy.finds_own_number(prisoner, &boxes, 100, &mut rng));
        }
    }

    #[test]
    fn test_single_box_trivially_found() {
        let mut rng = RngManager::new(99);
        let boxes = Permutation::identity(1);
        let strategy = RandomStrategy::new();

        // One box, one opening (limit 0 → 1 box opened)
        assert!(strategy.finds_own_number(0, &boxes, 0, &mut rng));
    }

    #[test]
    fn test_consumes_rng() {
        let mut rng = RngManager::new(12345);
        let before = rng.state();
        let boxes = Permutation::identity(16);

        RandomStrategy::new().finds_own_number(0, &boxes, 3, &mut rng);

        assert_ne!(rng.state(), before, "each evaluation must draw fresh randomness");
    }
}
