//! In-memory implementation of BlacklistRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::BlacklistedToken;
use crate::errors::DomainError;

use super::r#trait::BlacklistRepository;

#[derive(Clone, Default)]
pub struct InMemoryBlacklistRepository {
    entries: Arc<RwLock<HashMap<String, BlacklistedToken>>>,
}

impl InMemoryBlacklistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl BlacklistRepository for InMemoryBlacklistRepository {
    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.contains_key(token))
    }

    async fn insert(&self, entry: BlacklistedToken) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&entry.token) {
            return Ok(false);
        }
        entries.insert(entry.token.clone(), entry);
        Ok(true)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| !e.is_prunable_at(now));
        Ok(before - entries.len())
    }
}
