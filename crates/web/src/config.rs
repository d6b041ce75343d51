//! Process configuration read from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use invoicedash_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR `{value}` is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

/// Server settings.
///
/// - `BIND_ADDR`: listen address (default `0.0.0.0:8080`)
/// - `SEED_PATH`: optional JSON seed file for the in-memory data source
/// - `LOG_FORMAT`: `json` (default) or `pretty`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the real env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let seed_path = lookup("SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidLogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            seed_path,
            log_format,
        })
    }
}
