//! Application Configuration
//!
//! Configuration for the web server and the database connection. Values
//! come from the environment (`WEB_HOST`, `WEB_PORT`, `DATABASE_URL`) with
//! defaults suitable for local development.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// WEB_PORT was set but is not a valid port number
    #[error("invalid WEB_PORT value: {0}")]
    InvalidPort(String),
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4747)
    #[serde(default = "default_port")]
    pub port: u16,

    /// MySQL connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4747
}

fn default_database_url() -> String {
    "mysql://root@localhost:3306/bookstore".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
        }
    }
}

impl AppConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("WEB_HOST").ok(),
            std::env::var("WEB_PORT").ok(),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => default_port(),
        };

        Ok(Self {
            host: host.unwrap_or_else(default_host),
            port,
            database_url: database_url.unwrap_or_else(default_database_url),
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4747);
        assert!(config.database_url.starts_with("mysql://"));
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = AppConfig::from_vars(
            Some("127.0.0.1".to_string()),
            Some("9090".to_string()),
            Some("mysql://app@db:3306/bookstore".to_string()),
        )
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.database_url, "mysql://app@db:3306/bookstore");
    }

    #[test]
    fn test_from_vars_invalid_port() {
        let result = AppConfig::from_vars(None, Some("not-a-port".to_string()), None);
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }
}
