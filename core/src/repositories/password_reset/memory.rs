//! In-memory implementation of PasswordResetRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::PasswordResetToken;
use crate::errors::DomainError;

use super::r#trait::PasswordResetRepository;

#[derive(Clone, Default)]
pub struct InMemoryPasswordResetRepository {
    tokens: Arc<RwLock<HashMap<String, PasswordResetToken>>>,
}

impl InMemoryPasswordResetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[async_trait]
impl PasswordResetRepository for InMemoryPasswordResetRepository {
    async fn save(&self, token: PasswordResetToken) -> Result<(), DomainError> {
        self.tokens.write().await.insert(token.token_hash.clone(), token);
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<PasswordResetToken>, DomainError> {
        Ok(self.tokens.read().await.get(token_hash).cloned())
    }

    async fn delete_by_hash(&self, token_hash: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.write().await.remove(token_hash).is_some())
    }

    async fn delete_for_user(&self, user_id: i64) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| t.user_id != user_id);
        Ok(before - tokens.len())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !t.is_expired_at(now));
        Ok(before - tokens.len())
    }
}
