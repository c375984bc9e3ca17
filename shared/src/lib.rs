//! Shared configuration and wire types for the TeamSync identity layer
//!
//! This crate provides functionality used by every service that issues or
//! verifies tokens:
//! - Configuration types loaded from the environment
//! - Response envelopes and error bodies

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CleanupConfig, ConfigError, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, ServerConfig, ServicesConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
