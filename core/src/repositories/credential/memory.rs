//! In-memory implementation of CredentialRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Credential, NewCredential};
use crate::errors::{AuthError, DomainError};

use super::r#trait::CredentialRepository;

#[derive(Default)]
struct Store {
    next_id: i64,
    by_id: HashMap<i64, Credential>,
}

#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deactivate an account
    pub async fn set_active(&self, id: i64, active: bool) {
        if let Some(credential) = self.store.write().await.by_id.get_mut(&id) {
            credential.is_active = active;
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.by_id.len()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, DomainError> {
        let store = self.store.read().await;
        Ok(store.by_id.values().find(|c| c.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Credential>, DomainError> {
        Ok(self.store.read().await.by_id.get(&id).cloned())
    }

    async fn create(&self, credential: NewCredential) -> Result<Credential, DomainError> {
        let mut store = self.store.write().await;

        if store.by_id.values().any(|c| c.email == credential.email) {
            return Err(AuthError::EmailAlreadyUsed.into());
        }

        store.next_id += 1;
        let created = Credential {
            id: store.next_id,
            name: credential.name,
            email: credential.email,
            password_hash: credential.password_hash,
            is_active: true,
            created_at: credential.created_at,
            last_login_at: None,
        };
        store.by_id.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let credential = store.by_id.get_mut(&id).ok_or(AuthError::UserNotFound)?;
        credential.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let credential = store.by_id.get_mut(&id).ok_or(AuthError::UserNotFound)?;
        credential.last_login_at = Some(at);
        Ok(())
    }
}
