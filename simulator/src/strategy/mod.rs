//! Box-search strategies
//!
//! Each prisoner must find their own number while opening at most
//! `attempt_limit` boxes (plus the one extra the random strategy is
//! traditionally granted). Two strategies are compared:
//!
//! 1. **Looped** ("smart"): start at the box matching one's own number and
//!    follow the permutation cycle. The prisoner's number always lies on the
//!    cycle through their starting box, so the group succeeds iff no cycle
//!    is longer than the attempt limit.
//! 2. **Random** ("fool"): open an independently drawn random subset of
//!    boxes. Every prisoner's group-success contribution is independent, so
//!    the group success probability collapses towards zero as N grows.
//!
//! # Strategy Interface
//!
//! All strategies implement the `SearchStrategy` trait. Every evaluation
//! receives the full per-prisoner context (the trial's shared permutation
//! and the simulation RNG) and uses what it needs: the looped strategy
//! never touches the RNG, the random strategy never reads box contents.
//!
//! ```rust
//! use prisoner_simulator_core_rs::strategy::SearchStrategy;
//! use prisoner_simulator_core_rs::{Permutation, RngManager};
//!
//! struct FirstBoxOnly;
//!
//! impl SearchStrategy for FirstBoxOnly {
//!     fn finds_own_number(
//!         &self,
//!         prisoner: usize,
//!         boxes: &Permutation,
//!         _attempt_limit: usize,
//!         _rng: &mut RngManager,
//!     ) -> bool {
//!         boxes.get(0) == prisoner
//!     }
//! }
//! ```

use crate::models::permutation::Permutation;
use crate::rng::RngManager;

pub mod looped;
pub mod random;

pub use looped::LoopedStrategy;
pub use random::RandomStrategy;

/// A prisoner's procedure for picking which boxes to open
pub trait SearchStrategy {
    /// Whether `prisoner` finds their own number within the attempt limit
    ///
    /// `boxes` is the trial's shared permutation (`boxes.get(i)` is the
    /// number hidden in box `i`). `rng` is the simulation's random source;
    /// deterministic strategies leave it untouched.
    fn finds_own_number(
        &self,
        prisoner: usize,
        boxes: &Permutation,
        attempt_limit: usize,
        rng: &mut RngManager,
    ) -> bool;
}
