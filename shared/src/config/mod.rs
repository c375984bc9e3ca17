//! Configuration module
//!
//! - `auth` - signing secret and token lifetimes
//! - `cleanup` - background sweep of expired tokens
//! - `database` - MySQL connection pool
//! - `environment` - environment detection and logging
//! - `server` - HTTP bind address
//! - `services` - this service's name and collaborator URLs

pub mod auth;
pub mod cleanup;
pub mod database;
pub mod environment;
pub mod server;
pub mod services;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, MIN_SECRET_LENGTH};
pub use cleanup::CleanupConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use services::ServicesConfig;

/// Configuration problems detected at start-up
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT secret must be at least {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("JWT secret is not configured")]
    MissingSecret,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub services: ServicesConfig,
    #[serde(default)]
    pub cleanup: CleanupConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            services: ServicesConfig::default(),
            cleanup: CleanupConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            services: ServicesConfig::from_env(),
            cleanup: CleanupConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Check start-up invariants
    ///
    /// The development fallback secret is tolerated outside production only.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::MissingSecret);
        }
        self.auth.jwt.validate()
    }
}

/// Read an environment variable and parse it, falling back to `default`
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
