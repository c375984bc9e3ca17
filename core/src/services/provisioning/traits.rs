//! Collaborator interface

use async_trait::async_trait;

use crate::domain::value_objects::{NewProfile, ProfileUpdate, UserProfile};
use crate::errors::DomainError;

/// The user-management service as seen from the issuer
#[async_trait]
pub trait UserProvisioner: Send + Sync {
    /// Creates the full profile; must succeed before a credential is stored
    async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile, DomainError>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), DomainError>;
}
