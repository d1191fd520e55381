use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use metro_core::NetworkConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Server configuration, read from a TOML file:
///
/// ```toml
/// bind = "0.0.0.0:8080"
/// request_timeout_secs = 10
///
/// [data]
/// stations_path = "data/bengaluru_metro_stations.csv"
/// connections_path = "data/bengaluru_metro_connections.csv"
/// passengers_path = "data/passenger_data.csv"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Requests handled at the same time
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,
    pub data: NetworkConfig,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_request_timeout() -> u64 {
    10
}

fn default_concurrency_limit() -> usize {
    64
}

impl ServerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn new(data: NetworkConfig) -> Self {
        Self {
            bind: default_bind(),
            request_timeout_secs: default_request_timeout(),
            concurrency_limit: default_concurrency_limit(),
            data,
        }
    }
}

impl std::str::FromStr for ServerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ServerConfig = toml::from_str(s)?;
        if config.concurrency_limit == 0 {
            return Err(ConfigError::Invalid(
                "concurrency_limit must be at least 1".to_string(),
            ));
        }
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
