//! Fixed-window request budget
//!
//! One process-wide counter shared by every client; the reset task zeroes
//! it at each window boundary regardless of arrival pattern. The counter is
//! atomic, so multi-worker servers keep a single global budget.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Fixed-window rate limiter with an owned reset task.
pub struct FixedWindowLimiter {
    limit: u32,
    window: Duration,
    count: AtomicU32,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window: Duration) -> Arc<Self> {
        Arc::new(Self {
            limit,
            window,
            count: AtomicU32::new(0),
            reset_task: Mutex::new(None),
        })
    }

    /// Spawn the recurring reset task. Idempotent; must run inside a tokio
    /// runtime.
    pub fn start(self: &Arc<Self>) {
        let mut guard = self.reset_task.lock().unwrap();
        if guard.is_some() {
            return;
        }

        let limiter = Arc::clone(self);
        *guard = Some(tokio::spawn(async move {
            let mut ticks = tokio::time::interval(limiter.window);
            // The first tick resolves immediately; skip it so the opening
            // window gets its full length.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                limiter.reset();
            }
        }));
    }

    /// Record one request against the current window. False once the
    /// post-increment count exceeds the limit.
    pub fn admit(&self) -> bool {
        let seen = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        let admitted = seen <= self.limit;
        if !admitted {
            debug!(seen, limit = self.limit, "request over the window budget");
        }
        admitted
    }

    /// Zero the counter for a fresh window. Unconditional, even mid-burst.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    /// Cancel the reset task. Safe to call more than once.
    pub fn stop(&self) {
        if let Some(task) = self.reset_task.lock().unwrap().take() {
            task.abort();
        }
    }
}
