//! Chaos injection core for the Havoc mock API
//!
//! Everything that decides how a request misbehaves lives here:
//! - [`rng`]: the injectable uniform randomness source
//! - [`profile`]: the probability table driving every trial
//! - [`corrupt`]: per-field corruption rules
//! - [`generator`]: synthetic user records, clean or degraded
//! - [`limiter`]: the fixed-window request budget
//! - [`gate`]: the per-request admission / delay / failure state machine
//!
//! The HTTP layer is a thin consumer: it asks the gate for a decision,
//! applies it, and serializes whatever the generator produced.

pub mod corrupt;
pub mod gate;
pub mod generator;
pub mod limiter;
pub mod profile;
pub mod rng;

pub use corrupt::FieldCorruptor;
pub use gate::{Admission, ChaosGate};
pub use generator::{GenerationMode, UserGenerator, BROKEN_AVATAR_URL};
pub use limiter::FixedWindowLimiter;
pub use profile::ChaosProfile;
pub use rng::{Randomness, ThreadRandomness};
