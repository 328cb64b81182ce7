//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG suitable for Monte Carlo simulation.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Reproducing a simulation run exactly (debugging)
//! - Testing (verify behavior against known sequences)
//!
//! The generator is always passed explicitly; there is no process-global
//! RNG state anywhere in the simulator.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use prisoner_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let slot = rng.index(100); // [0, 100)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64)
    ///
    /// # Example
    /// ```
    /// use prisoner_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    ///
    /// Advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random index in `[0, bound)`
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    ///
    /// # Example
    /// ```
    /// use prisoner_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let box_position = rng.index(100);
    /// assert!(box_position < 100);
    /// ```
    pub fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");

        (self.next() % bound as u64) as usize
    }

    /// Shuffle a slice in place with Fisher-Yates
    ///
    /// Each of the n! orderings of `items` is equally likely, in O(n) time.
    /// Empty and single-element slices are left untouched.
    ///
    /// # Example
    /// ```
    /// use prisoner_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let mut values: Vec<usize> = (0..10).collect();
    /// rng.shuffle(&mut values);
    ///
    /// let mut sorted = values.clone();
    /// sorted.sort_unstable();
    /// assert_eq!(sorted, (0..10).collect::<Vec<usize>>());
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Get current RNG state (for replay)
    ///
    /// # Example
    /// ```
    /// use prisoner_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// let state = rng.state();
    ///
    /// // Later, can recreate the RNG from this state
    /// let rng2 = RngManager::new(state);
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}
