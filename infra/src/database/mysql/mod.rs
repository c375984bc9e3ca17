//! MySQL repository implementations

mod blacklist_repository;
mod credential_repository;
mod password_reset_repository;
mod refresh_token_repository;

pub use blacklist_repository::MySqlBlacklistRepository;
pub use credential_repository::MySqlCredentialRepository;
pub use password_reset_repository::MySqlPasswordResetRepository;
pub use refresh_token_repository::MySqlRefreshTokenRepository;

use ts_core::errors::DomainError;

/// Wraps a sqlx failure with what was being attempted
pub(crate) fn db_error(context: &str) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}
