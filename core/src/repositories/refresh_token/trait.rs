//! Refresh token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken persistence operations
///
/// Rows are keyed by the opaque token string. Writes are atomic per row;
/// no operation needs a cross-row transaction.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Save a new refresh token
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token string)
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its opaque value
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete a refresh token
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token not found
    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete all tokens whose `expiry_date` is before `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
