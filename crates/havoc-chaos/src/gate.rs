//! Per-request chaos decisions for challenge routes
//!
//! The gate runs the admission state machine's draws in a fixed order and
//! hands the HTTP layer a decision to apply. It owns no request state;
//! the only shared mutable state behind it is the limiter's counter.

use crate::limiter::FixedWindowLimiter;
use crate::profile::ChaosProfile;
use crate::rng::Randomness;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of the admission state machine for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Over the window budget; reject immediately with 429.
    RateLimited,

    /// Proceed after the injected delay; optionally fail with a 500 once
    /// the delay has elapsed.
    Proceed {
        delay: Duration,
        inject_error: bool,
    },
}

/// Gate for challenge-tagged routes: rate limiting, latency injection,
/// failure injection, in that order.
pub struct ChaosGate {
    limiter: Arc<FixedWindowLimiter>,
    rng: Arc<dyn Randomness>,
    profile: ChaosProfile,
}

impl ChaosGate {
    pub fn new(
        limiter: Arc<FixedWindowLimiter>,
        rng: Arc<dyn Randomness>,
        profile: ChaosProfile,
    ) -> Self {
        Self {
            limiter,
            rng,
            profile,
        }
    }

    /// Run the draws for one request. Every request starts here fresh;
    /// nothing carries over between steps except the limiter counter.
    pub fn evaluate(&self) -> Admission {
        if !self.limiter.admit() {
            return Admission::RateLimited;
        }

        let delay = Duration::from_millis(
            self.rng
                .int_in_range(self.profile.delay_min_ms, self.profile.delay_max_ms),
        );
        let inject_error = self.rng.chance(self.profile.error_rate);

        Admission::Proceed {
            delay,
            inject_error,
        }
    }

    /// Independent degraded-health trial for the liveness variant. Runs
    /// its own draw; never reuses the failure-injection one.
    pub fn degrade_health(&self) -> bool {
        self.rng.chance(self.profile.degraded_rate)
    }
}
