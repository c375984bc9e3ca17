//! Revocation store interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::BlacklistedToken;
use crate::errors::DomainError;

/// Persisted set of access tokens revoked before their natural expiry
#[async_trait]
pub trait BlacklistRepository: Send + Sync {
    async fn exists(&self, token: &str) -> Result<bool, DomainError>;

    /// Insert an entry unless the token is already present
    ///
    /// # Returns
    /// * `Ok(true)` - Entry inserted
    /// * `Ok(false)` - Token was already blacklisted
    async fn insert(&self, entry: BlacklistedToken) -> Result<bool, DomainError>;

    /// Delete every entry whose `expires_at` is before `now`
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
