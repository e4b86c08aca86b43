//! Uniform randomness behind an injectable trait
//!
//! Production code draws from the thread-local generator and is never
//! seeded; tests substitute a scripted source.

use rand::Rng;

/// Conventional trial probability when a caller has no specific rate.
pub const DEFAULT_TRIAL_PROBABILITY: f64 = 0.1;

/// Uniform random source for chaos decisions.
pub trait Randomness: Send + Sync {
    /// True with the given probability.
    fn chance(&self, probability: f64) -> bool;

    /// Uniform integer in `[min, max]` inclusive.
    fn int_in_range(&self, min: u64, max: u64) -> u64;
}

/// Production source backed by `rand::thread_rng()`.
pub struct ThreadRandomness;

impl Randomness for ThreadRandomness {
    fn chance(&self, probability: f64) -> bool {
        rand::thread_rng().gen_bool(probability.clamp(0.0, 1.0))
    }

    fn int_in_range(&self, min: u64, max: u64) -> u64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Deterministic sources for tests.
pub mod testing {
    use super::Randomness;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Every trial resolves the same way; integer draws return a fixed
    /// value clamped into the requested range.
    pub struct AlwaysRandomness {
        trial: bool,
        value: u64,
    }

    impl AlwaysRandomness {
        /// Every trial fires.
        pub fn firing() -> Self {
            Self {
                trial: true,
                value: 0,
            }
        }

        /// No trial ever fires.
        pub fn passing() -> Self {
            Self {
                trial: false,
                value: 0,
            }
        }

        pub fn with_value(mut self, value: u64) -> Self {
            self.value = value;
            self
        }
    }

    impl Randomness for AlwaysRandomness {
        fn chance(&self, _probability: f64) -> bool {
            self.trial
        }

        fn int_in_range(&self, min: u64, max: u64) -> u64 {
            self.value.clamp(min, max)
        }
    }

    /// Scripted boolean draws, consumed in order; `false` once exhausted.
    pub struct SequenceRandomness {
        draws: Mutex<VecDeque<bool>>,
    }

    impl SequenceRandomness {
        pub fn new(draws: impl IntoIterator<Item = bool>) -> Self {
            Self {
                draws: Mutex::new(draws.into_iter().collect()),
            }
        }
    }

    impl Randomness for SequenceRandomness {
        fn chance(&self, _probability: f64) -> bool {
            self.draws.lock().unwrap().pop_front().unwrap_or(false)
        }

        fn int_in_range(&self, min: u64, _max: u64) -> u64 {
            min
        }
    }
}
