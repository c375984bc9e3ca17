//! Refresh token lifecycle: issue, look up, revoke

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::{DeviceInfo, RefreshToken};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RefreshTokenRepository;

/// Service over the persisted refresh tokens
///
/// A presented token is never rotated; only the access token is renewed.
pub struct RefreshTokenService<R: RefreshTokenRepository> {
    repository: Arc<R>,
    ttl: Duration,
}

impl<R: RefreshTokenRepository> RefreshTokenService<R> {
    pub fn new(repository: Arc<R>, ttl: Duration) -> Self {
        Self { repository, ttl }
    }

    pub async fn issue(&self, user_id: i64, device: DeviceInfo) -> Result<RefreshToken, DomainError> {
        self.issue_at(user_id, device, Utc::now()).await
    }

    /// Persists a new random refresh token for `user_id`
    pub async fn issue_at(
        &self,
        user_id: i64,
        device: DeviceInfo,
        now: DateTime<Utc>,
    ) -> Result<RefreshToken, DomainError> {
        let token = RefreshToken::issue(user_id, device, now, self.ttl);
        let saved = self.repository.save(token).await.map_err(|e| {
            warn!(user_id, "Failed to store refresh token: {}", e);
            DomainError::Token(TokenError::TokenGenerationFailed)
        })?;
        debug!(user_id, ip = %saved.ip_address, "Refresh token issued");
        Ok(saved)
    }

    /// Looks up a token that is still usable
    ///
    /// An expired row is deleted before failing, so a second lookup of the
    /// same string reports `InvalidRefreshToken`.
    pub async fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<RefreshToken, DomainError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let stored = self
            .repository
            .find_by_token(token)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        if stored.is_expired_at(now) {
            self.repository.delete_by_token(token).await?;
            info!(user_id = stored.user_id, "Expired refresh token deleted on use");
            return Err(TokenError::ExpiredRefreshToken.into());
        }

        Ok(stored)
    }

    /// Deletes the token if present
    pub async fn revoke(&self, token: &str) -> Result<bool, DomainError> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(false);
        }
        self.repository.delete_by_token(token).await
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        self.repository.delete_expired(now).await
    }
}
