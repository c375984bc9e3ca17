//! Authenticated HTTP client for calls between services

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use ts_core::services::ServiceTokenMinter;

use crate::InfrastructureError;

/// Standard response envelope used by sibling services
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// HTTP client bound to one collaborator base URL
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
    minter: ServiceTokenMinter,
}

impl ServiceClient {
    /// Create a client for `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Collaborator root, e.g. `http://localhost:8082`
    /// * `minter` - Mints the service token attached to each request
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        minter: ServiceTokenMinter,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            minter,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request builder with a fresh service token already attached
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, InfrastructureError> {
        let token = self.minter.mint()?;
        Ok(self.http.request(method, self.url(path)).bearer_auth(token))
    }

    /// Sends `body` and returns the `data` field of the response envelope
    pub async fn send_for_data<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, InfrastructureError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body).await?;
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| InfrastructureError::InvalidResponse(e.to_string()))?;

        envelope
            .data
            .ok_or_else(|| InfrastructureError::InvalidResponse("response missing data".to_string()))
    }

    /// Sends `body` and discards the response body
    pub async fn send<B>(&self, method: Method, path: &str, body: &B) -> Result<(), InfrastructureError>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body).await.map(|_| ())
    }

    async fn dispatch<B>(&self, method: Method, path: &str, body: &B) -> Result<Response, InfrastructureError>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, path, "Calling {}", self.base_url);

        let response = self.request(method, path)?.json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), path, "Collaborator call failed");
            return Err(InfrastructureError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}
