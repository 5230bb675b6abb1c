//! Configuration management for the todo server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// Browser origins allowed by CORS
    pub cors_allowed_origins: Vec<String>,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            cors_allowed_origins: vec!["http://localhost:4200".to_string()],
            shutdown_timeout: 30,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();

        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or(defaults.host),
                port: lookup("PORT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
                cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map_or(defaults.cors_allowed_origins, |s| parse_origins(&s)),
                shutdown_timeout: lookup("SHUTDOWN_TIMEOUT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.shutdown_timeout),
            },
        }
    }

    /// `host:port` to bind the listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// How long to wait for in-flight requests after a shutdown signal
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.server.shutdown_timeout)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
