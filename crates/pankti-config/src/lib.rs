//! Server configuration loaded from the environment.
//!
//! Reads `HOST` and `PORT` with defaults so the server starts without any
//! environment setup:
//!
//! ```rust
//! use pankti_config::ServerConfig;
//!
//! let config = ServerConfig::default();
//! assert_eq!(config.bind_addr(), "0.0.0.0:8000");
//! ```

use std::env;
use std::num::ParseIntError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Errors that can occur when loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `0.0.0.0`.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the `HOST` and `PORT` environment variables.
    ///
    /// An unset variable falls back to its default; a set but unparsable
    /// `PORT` is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match port {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Returns the `host:port` address for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn honors_host_and_port_overrides() {
        let config =
            ServerConfig::from_vars(Some("127.0.0.1".into()), Some("5000".into())).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = ServerConfig::from_vars(None, Some("not-a-port".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "not-a-port"));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = ServerConfig {
            host: "localhost".into(),
            port: 3000,
        };
        assert_eq!(config.bind_addr(), "localhost:3000");
    }
}
