//! Havoc Daemon - deliberately unreliable mock user API
//!
//! The daemon serves synthetic user records, plus "challenge" variants of
//! every endpoint that inject latency, failures, malformed payloads, and
//! rate limiting so API clients can rehearse against a flaky upstream.

use clap::Parser;
use havoc_daemon::config::DaemonConfig;
use havoc_daemon::error::{DaemonError, DaemonResult};
use havoc_daemon::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Havoc Daemon CLI
#[derive(Parser)]
#[command(name = "havocd")]
#[command(about = "Havoc Daemon - deliberately unreliable mock user API", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HAVOC_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "HAVOC_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level
    #[arg(long, env = "HAVOC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "HAVOC_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.logging.json = true;
    }

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Print startup banner
    println!(
        r#"
  _
 | |__   __ ___   _____   ___
 | '_ \ / _` \ \ / / _ \ / __|
 | | | | (_| |\ V / (_) | (__
 |_| |_|\__,_| \_/ \___/ \___|

  Havoc - deliberately unreliable mock user API
  Version: {}
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.server.listen_addr
    );

    // Create and run server
    let server = Server::new(config);
    server.run().await
}
