//! Box contents as a permutation
//!
//! Each trial hides a permutation of prisoner numbers in the boxes:
//! `permutation[i]` is the number sitting in box `i`.
//!
//! # Critical Invariants
//!
//! 1. **Bijectivity**: every value in [0, n) appears exactly once
//! 2. **Immutability**: box contents never change once a trial starts;
//!    a fresh permutation is drawn for every trial

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::RngManager;

/// Errors from building a permutation out of raw values
#[derive(Debug, Error, PartialEq)]
pub enum PermutationError {
    #[error("value {value} out of range for permutation of length {len}")]
    OutOfRange { value: usize, len: usize },

    #[error("value {value} appears more than once")]
    Duplicate { value: usize },
}

/// A bijective assignment of prisoner numbers to box positions
///
/// # Example
/// ```
/// use prisoner_simulator_core_rs::{Permutation, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let boxes = Permutation::random(10, &mut rng);
///
/// assert_eq!(boxes.len(), 10);
/// let mut sorted = boxes.as_slice().to_vec();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..10).collect::<Vec<usize>>()); // bijection
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The identity permutation: box `i` contains number `i`
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Draw a uniformly random permutation of `[0, n)`
    ///
    /// Each of the n! permutations is equally likely (Fisher-Yates over the
    /// identity). `n = 0` yields the empty permutation.
    pub fn random(n: usize, rng: &mut RngManager) -> Self {
        let mut values: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut values);
        Self(values)
    }

    /// Build a permutation from raw values, validating bijectivity
    ///
    /// # Errors
    /// Returns `PermutationError` if any value is out of `[0, len)` or
    /// appears more than once.
    ///
    /// # Example
    /// ```
    /// use prisoner_simulator_core_rs::Permutation;
    ///
    /// let boxes = Permutation::from_vec(vec![1, 0, 3, 2]).unwrap();
    /// assert_eq!(boxes.get(0), 1);
    ///
    /// assert!(Permutation::from_vec(vec![0, 0, 1]).is_err());
    /// ```
    pub fn from_vec(values: Vec<usize>) -> Result<Self, PermutationError> {
        let len = values.len();
        let mut seen = vec![false; len];
        for &value in &values {
            if value >= len {
                return Err(PermutationError::OutOfRange { value, len });
            }
            if seen[value] {
                return Err(PermutationError::Duplicate { value });
            }
            seen[value] = true;
        }
        Ok(Self(values))
    }

    /// Number of boxes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty permutation
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number hidden in box `position`
    ///
    /// # Panics
    /// Panics if `position` is out of bounds.
    pub fn get(&self, position: usize) -> usize {
        self.0[position]
    }

    /// All box contents in position order
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Length of the cycle through `start`
    ///
    /// Repeatedly follows "go to the box whose index equals the current
    /// box's content" until returning to `start`. A looped-strategy prisoner
    /// starting at their own number succeeds iff this length is within the
    /// attempt limit.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    ///
    /// # Example
    /// ```
    /// use prisoner_simulator_core_rs::Permutation;
    ///
    /// let boxes = Permutation::from_vec(vec![1, 2, 3, 0]).unwrap();
    /// assert_eq!(boxes.cycle_length_from(0), 4); // single 4-cycle
    ///
    /// let identity = Permutation::identity(4);
    /// assert_eq!(identity.cycle_length_from(2), 1);
    /// ```
    pub fn cycle_length_from(&self, start: usize) -> usize {
        let mut current = self.0[start];
        let mut length = 1;
        while current != start {
            current = self.0[current];
            length += 1;
        }
        length
    }
}
