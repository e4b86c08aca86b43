//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use havoc_chaos::{ChaosGate, FixedWindowLimiter, Randomness, ThreadRandomness, UserGenerator};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Havoc daemon server
pub struct Server {
    config: DaemonConfig,
    limiter: Arc<FixedWindowLimiter>,
    state: AppState,
}

impl Server {
    /// Wire the chaos core together with the production randomness source.
    pub fn new(config: DaemonConfig) -> Self {
        let rng: Arc<dyn Randomness> = Arc::new(ThreadRandomness);

        let limiter =
            FixedWindowLimiter::new(config.chaos.rate_limit, config.chaos.rate_window());
        let gate = Arc::new(ChaosGate::new(
            limiter.clone(),
            rng.clone(),
            config.chaos.clone(),
        ));
        let generator = Arc::new(UserGenerator::new(rng, config.chaos.clone()));

        let state = AppState::new(generator, gate);

        Self {
            config,
            limiter,
            state,
        }
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;
        let app = create_router(self.state.clone(), self.config.server.enable_cors);

        self.limiter.start();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("havoc daemon listening on {}", addr);
        tracing::info!(
            rate_limit = self.config.chaos.rate_limit,
            error_rate = self.config.chaos.error_rate,
            "chaos profile active"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("havoc daemon shutting down");
        self.limiter.stop();

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
