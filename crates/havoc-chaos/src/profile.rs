//! Tuning table for chaos behavior
//!
//! Every trial the service runs is driven by this table. Defaults are the
//! reference rates; deployments can override any of them through the daemon
//! configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Probabilities and limits for challenge-mode behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaosProfile {
    /// Chance the name becomes a wire `null`.
    #[serde(default = "default_name_null_rate")]
    pub name_null_rate: f64,

    /// Chance the phone field is removed from the record.
    #[serde(default = "default_phone_drop_rate")]
    pub phone_drop_rate: f64,

    /// Chance the address becomes a wire `null`.
    #[serde(default = "default_address_null_rate")]
    pub address_null_rate: f64,

    /// Chance the job title is blanked to the empty string.
    #[serde(default = "default_job_title_blank_rate")]
    pub job_title_blank_rate: f64,

    /// Chance the avatar is swapped for the known-bad URL.
    #[serde(default = "default_avatar_broken_rate")]
    pub avatar_broken_rate: f64,

    /// Chance the address key is removed entirely, drawn after the value
    /// trial and overriding its outcome.
    #[serde(default = "default_address_drop_rate")]
    pub address_drop_rate: f64,

    /// Chance a gated request fails with an injected 500.
    #[serde(default = "default_error_rate")]
    pub error_rate: f64,

    /// Chance the challenge health check reports degraded.
    #[serde(default = "default_degraded_rate")]
    pub degraded_rate: f64,

    /// Chance a challenge batch is silently under-delivered.
    #[serde(default = "default_truncation_rate")]
    pub truncation_rate: f64,

    /// Fraction of the requested batch delivered when truncation fires.
    #[serde(default = "default_truncation_factor")]
    pub truncation_factor: f64,

    /// Injected delay bounds, milliseconds, inclusive.
    #[serde(default = "default_delay_min_ms")]
    pub delay_min_ms: u64,

    #[serde(default = "default_delay_max_ms")]
    pub delay_max_ms: u64,

    /// Requests admitted per rate-limit window.
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,

    /// Fixed rate-limit window length, milliseconds.
    #[serde(default = "default_rate_window_ms")]
    pub rate_window_ms: u64,

    /// Upper bound on batch size.
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,

    /// Batch size when the count parameter does not parse.
    #[serde(default = "default_batch_fallback")]
    pub batch_fallback: usize,
}

impl Default for ChaosProfile {
    fn default() -> Self {
        Self {
            name_null_rate: default_name_null_rate(),
            phone_drop_rate: default_phone_drop_rate(),
            address_null_rate: default_address_null_rate(),
            job_title_blank_rate: default_job_title_blank_rate(),
            avatar_broken_rate: default_avatar_broken_rate(),
            address_drop_rate: default_address_drop_rate(),
            error_rate: default_error_rate(),
            degraded_rate: default_degraded_rate(),
            truncation_rate: default_truncation_rate(),
            truncation_factor: default_truncation_factor(),
            delay_min_ms: default_delay_min_ms(),
            delay_max_ms: default_delay_max_ms(),
            rate_limit: default_rate_limit(),
            rate_window_ms: default_rate_window_ms(),
            max_batch: default_max_batch(),
            batch_fallback: default_batch_fallback(),
        }
    }
}

impl ChaosProfile {
    /// Clamp probabilities into `[0, 1]` and order the delay bounds.
    /// Called once at configuration load so draw sites can trust the table.
    pub fn normalize(&mut self) {
        for rate in [
            &mut self.name_null_rate,
            &mut self.phone_drop_rate,
            &mut self.address_null_rate,
            &mut self.job_title_blank_rate,
            &mut self.avatar_broken_rate,
            &mut self.address_drop_rate,
            &mut self.error_rate,
            &mut self.degraded_rate,
            &mut self.truncation_rate,
            &mut self.truncation_factor,
        ] {
            *rate = rate.clamp(0.0, 1.0);
        }

        if self.delay_min_ms > self.delay_max_ms {
            std::mem::swap(&mut self.delay_min_ms, &mut self.delay_max_ms);
        }
    }

    pub fn rate_window(&self) -> Duration {
        Duration::from_millis(self.rate_window_ms)
    }
}

// Default value helpers
fn default_name_null_rate() -> f64 {
    0.3
}

fn default_phone_drop_rate() -> f64 {
    0.2
}

fn default_address_null_rate() -> f64 {
    0.2
}

fn default_job_title_blank_rate() -> f64 {
    0.2
}

fn default_avatar_broken_rate() -> f64 {
    0.15
}

fn default_address_drop_rate() -> f64 {
    0.1
}

fn default_error_rate() -> f64 {
    0.05
}

fn default_degraded_rate() -> f64 {
    0.02
}

fn default_truncation_rate() -> f64 {
    0.1
}

fn default_truncation_factor() -> f64 {
    0.7
}

fn default_delay_min_ms() -> u64 {
    100
}

fn default_delay_max_ms() -> u64 {
    2000
}

fn default_rate_limit() -> u32 {
    50
}

fn default_rate_window_ms() -> u64 {
    60_000
}

fn default_max_batch() -> usize {
    100
}

fn default_batch_fallback() -> usize {
    10
}
