//! Application state for API handlers

use havoc_chaos::{ChaosGate, UserGenerator};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Synthetic record generator
    pub generator: Arc<UserGenerator>,

    /// Chaos gate for challenge routes
    pub gate: Arc<ChaosGate>,
}

impl AppState {
    pub fn new(generator: Arc<UserGenerator>, gate: Arc<ChaosGate>) -> Self {
        Self { generator, gate }
    }
}
