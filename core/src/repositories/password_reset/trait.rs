//! Password reset token repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::PasswordResetToken;
use crate::errors::DomainError;

/// Stores reset tokens by their SHA-256 digest
#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    async fn save(&self, token: PasswordResetToken) -> Result<(), DomainError>;

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<PasswordResetToken>, DomainError>;

    async fn delete_by_hash(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Remove any outstanding tokens for a user
    async fn delete_for_user(&self, user_id: i64) -> Result<usize, DomainError>;

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
