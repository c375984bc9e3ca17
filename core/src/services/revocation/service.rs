//! Token blacklist service

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::BlacklistedToken;
use crate::errors::DomainError;
use crate::repositories::BlacklistRepository;
use crate::services::token::{strip_bearer, SigningContext};

/// Read side of the revocation store, as consulted by a request gate
#[async_trait]
pub trait RevocationList: Send + Sync {
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError>;
}

/// Blacklist of revoked access tokens
pub struct TokenBlacklistService<B: BlacklistRepository> {
    repository: Arc<B>,
    signing: Arc<SigningContext>,
}

impl<B: BlacklistRepository> TokenBlacklistService<B> {
    pub fn new(repository: Arc<B>, signing: Arc<SigningContext>) -> Self {
        Self { repository, signing }
    }

    pub async fn blacklist(&self, token: &str) -> Result<bool, DomainError> {
        self.blacklist_at(token, Utc::now()).await
    }

    /// Revokes an access token
    ///
    /// No-op for blank or already-blacklisted tokens. Only tokens signed
    /// with our key are accepted, expired ones included. The entry keeps
    /// the token's own `exp` so the sweep can drop it later.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - a new entry was stored
    /// * `Ok(false)` - nothing to do
    /// * `Err(TokenError::SignatureInvalid)` - not signed with our key
    /// * `Err(TokenError::MalformedToken)` - claims could not be decoded
    pub async fn blacklist_at(&self, token: &str, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let token = strip_bearer(token);
        if token.is_empty() {
            return Ok(false);
        }

        if self.repository.exists(token).await? {
            debug!("Token already blacklisted");
            return Ok(false);
        }

        let claims = self.signing.verify(token)?;
        let entry = BlacklistedToken::new(token, claims.expires_at(), now);
        let inserted = self.repository.insert(entry).await?;

        if inserted {
            info!(expires_at = %claims.expires_at(), "Access token blacklisted");
        }
        Ok(inserted)
    }

    pub async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError> {
        let token = strip_bearer(token);
        if token.is_empty() {
            return Ok(false);
        }
        self.repository.exists(token).await
    }

    /// Deletes entries whose `expires_at` is before `now`
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let removed = self.repository.delete_expired(now).await?;
        debug!(removed, "Blacklist sweep finished");
        Ok(removed)
    }
}

#[async_trait]
impl<B: BlacklistRepository> RevocationList for TokenBlacklistService<B> {
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        self.is_blacklisted(token).await
    }
}
