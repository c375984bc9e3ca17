//! Client for the user-management service

use async_trait::async_trait;
use reqwest::Method;
use tracing::info;
use ts_core::domain::value_objects::{NewProfile, ProfileUpdate, UserProfile};
use ts_core::errors::DomainError;
use ts_core::services::UserProvisioner;

use super::service_client::ServiceClient;

const USERS_PATH: &str = "/users";
const PROFILE_PATH: &str = "/users/profile";

/// Single-attempt calls to the user-management service
///
/// Retrying is left to the caller's `RetryPolicy`.
pub struct UserManagementClient {
    client: ServiceClient,
}

impl UserManagementClient {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserProvisioner for UserManagementClient {
    async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile, DomainError> {
        info!(email = %profile.email, "Creating user in user-management service");
        let created = self
            .client
            .send_for_data(Method::POST, USERS_PATH, profile)
            .await?;
        Ok(created)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), DomainError> {
        info!(email = %update.email, "Updating user profile in user-management service");
        self.client.send(Method::PUT, PROFILE_PATH, update).await?;
        Ok(())
    }
}
