//! Application configuration loaded from environment variables.
//!
//! Every variable has a development-friendly default; a value that is
//! present but unparseable fails startup with a clear error.

use std::env;
use thiserror::Error;

/// Configuration errors that can occur during environment loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string (file path URL or `sqlite::memory:`).
    pub database_url: String,

    /// Tracing filter directive (e.g., "info,staffsync=debug").
    pub rust_log: String,

    /// Allowed CORS origins (comma-separated URLs, or "*").
    pub cors_origins: Vec<String>,

    /// Server bind address.
    pub host: String,

    /// Server listen port.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:staffsync.db".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let cors_origins =
            parse_cors_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()?;

        Ok(Self {
            database_url,
            rust_log,
            cors_origins,
            host,
            port,
        })
    }

    /// The address to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
