//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence and collaborator interfaces
//! declared in `ts_core`.
//!
//! ## Architecture
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Clients**: outbound HTTP calls to sibling services, each carrying a
//!   freshly minted service token
//! - **Notifier**: delivery of password reset links
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use ts_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Outbound HTTP clients
pub mod clients;

/// Reset link delivery
pub mod notifier;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from a collaborator
    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// 2xx response whose body could not be used
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token minting failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Internal {
                message: format!("Database error: {}", e),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
            InfrastructureError::Token(e) => DomainError::Token(e),
            other => DomainError::Collaborator {
                message: other.to_string(),
            },
        }
    }
}
