//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Repository implementations for credentials, refresh tokens,
//!   blacklisted tokens and password reset tokens
//!
//! The schema lives in `infra/migrations`.

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlBlacklistRepository, MySqlCredentialRepository, MySqlPasswordResetRepository,
    MySqlRefreshTokenRepository,
};
