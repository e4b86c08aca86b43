//! Configuration for havoc-daemon

use havoc_chaos::ChaosProfile;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chaos probability table and limits
    #[serde(default)]
    pub chaos: ChaosProfile,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            chaos: ChaosProfile::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,

    /// Enable permissive CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3001".parse().unwrap(),
            enable_cors: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration: defaults, then an optional file, then `HAVOC_*`
    /// environment variables. The chaos table is normalized afterwards so
    /// draw sites can trust it.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HAVOC")
                .separator("_")
                .try_parsing(true),
        );

        let mut config: DaemonConfig = builder.build()?.try_deserialize()?;
        config.chaos.normalize();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.server.listen_addr.port(), 3001);
        assert!(config.server.enable_cors);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_default_chaos_table_is_the_reference_one() {
        let config = DaemonConfig::default();
        assert_eq!(config.chaos.rate_limit, 50);
        assert_eq!(config.chaos.error_rate, 0.05);
        assert_eq!(config.chaos.max_batch, 100);
    }

    #[test]
    fn test_load_without_file_yields_defaults() {
        let config = DaemonConfig::load(None).unwrap();
        assert_eq!(config.server.listen_addr.port(), 3001);
        assert_eq!(config.chaos.delay_min_ms, 100);
        assert_eq!(config.chaos.delay_max_ms, 2000);
    }
}
