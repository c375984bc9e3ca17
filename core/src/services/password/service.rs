//! Password change and reset flows

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::PasswordResetToken;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{CredentialRepository, PasswordResetRepository};

use super::hasher::PasswordHasher;
use super::notifier::ResetNotifier;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Service for password change and token-based reset
pub struct PasswordService<C, P>
where
    C: CredentialRepository,
    P: PasswordResetRepository,
{
    credentials: Arc<C>,
    resets: Arc<P>,
    notifier: Arc<dyn ResetNotifier>,
    hasher: PasswordHasher,
    reset_ttl: Duration,
}

impl<C, P> PasswordService<C, P>
where
    C: CredentialRepository,
    P: PasswordResetRepository,
{
    pub fn new(
        credentials: Arc<C>,
        resets: Arc<P>,
        notifier: Arc<dyn ResetNotifier>,
        reset_ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            resets,
            notifier,
            hasher: PasswordHasher::default(),
            reset_ttl,
        }
    }

    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Changes the password of the authenticated user
    pub async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        validate_new_password(new_password)?;

        let credential = self
            .credentials
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify(current_password, &credential.password_hash) {
            return Err(AuthError::IncorrectCurrentPassword.into());
        }

        let hash = self.hasher.hash(new_password)?;
        self.credentials.update_password(credential.id, &hash).await?;

        info!(email = %email, "Password changed");
        Ok(())
    }

    pub async fn request_reset(&self, email: &str) -> Result<(), DomainError> {
        self.request_reset_at(email, Utc::now()).await
    }

    /// Issues a reset token if the account exists
    ///
    /// Succeeds silently for unknown emails. Earlier outstanding tokens of
    /// the same user are discarded.
    pub async fn request_reset_at(&self, email: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        let Some(credential) = self.credentials.find_by_email(email.trim()).await? else {
            info!("Password reset requested for unknown email");
            return Ok(());
        };

        self.resets.delete_for_user(credential.id).await?;

        let token = Uuid::new_v4().to_string();
        let expires_at = now + self.reset_ttl;
        self.resets
            .save(PasswordResetToken {
                token_hash: hash_reset_token(&token),
                user_id: credential.id,
                expires_at,
                created_at: now,
            })
            .await?;

        if let Err(e) = self
            .notifier
            .send_reset_link(&credential.email, &token, expires_at)
            .await
        {
            warn!(email = %credential.email, "Failed to deliver reset link: {}", e);
        }

        info!(email = %credential.email, "Password reset requested");
        Ok(())
    }

    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> Result<(), DomainError> {
        self.reset_password_at(reset_token, new_password, Utc::now()).await
    }

    /// Consumes a reset token once and stores the new password
    pub async fn reset_password_at(
        &self,
        reset_token: &str,
        new_password: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        validate_new_password(new_password)?;

        let token_hash = hash_reset_token(reset_token.trim());
        let stored = self
            .resets
            .find_by_hash(&token_hash)
            .await?
            .ok_or(TokenError::InvalidResetToken)?;

        // Single use, whether or not it is still valid
        self.resets.delete_by_hash(&token_hash).await?;

        if stored.is_expired_at(now) {
            return Err(TokenError::InvalidResetToken.into());
        }

        let hash = self.hasher.hash(new_password)?;
        self.credentials.update_password(stored.user_id, &hash).await?;

        info!(user_id = stored.user_id, "Password reset completed");
        Ok(())
    }
}

fn validate_new_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::Validation {
            message: format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        });
    }
    Ok(())
}

/// SHA-256 hex digest stored in place of the reset token
pub(crate) fn hash_reset_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
