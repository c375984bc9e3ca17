//! Credential repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Credential, NewCredential};
use crate::errors::DomainError;

/// Repository trait for login credentials
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Credential>, DomainError>;

    /// Insert a new active credential
    ///
    /// # Returns
    /// * `Err(DomainError::Auth(EmailAlreadyUsed))` - Email uniqueness violated
    async fn create(&self, credential: NewCredential) -> Result<Credential, DomainError>;

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError>;

    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> Result<(), DomainError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
