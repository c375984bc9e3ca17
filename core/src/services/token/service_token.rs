//! Short-lived tokens identifying a calling service

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::Claims;
use crate::errors::TokenError;

use super::signing::SigningContext;

/// Mints a fresh service token for every outbound call
#[derive(Clone, Debug)]
pub struct ServiceTokenMinter {
    signing: Arc<SigningContext>,
    service_name: String,
    ttl: Duration,
}

impl ServiceTokenMinter {
    pub fn new(signing: Arc<SigningContext>, service_name: impl Into<String>, ttl: Duration) -> Self {
        Self {
            signing,
            service_name: service_name.into(),
            ttl,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Token for this service
    pub fn mint(&self) -> Result<String, TokenError> {
        self.mint_service_token(&self.service_name, Utc::now())
    }

    /// Token whose subject is `service_name` plus the reserved suffix
    pub fn mint_service_token(
        &self,
        service_name: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.signing
            .sign(&Claims::for_service(service_name, now, self.ttl))
    }
}
