//! Configuration for the authentication service

use crate::services::password::PasswordHasher;
use crate::services::provisioning::RetryPolicy;

/// Client-facing message when the profile could not be provisioned
pub const PROFILE_CREATION_FAILED: &str = "Failed to create user profile. Please try again.";

pub const PROFILE_UPDATE_FAILED: &str = "Failed to update user profile";

/// Configuration for the authentication service
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Retry applied to every user-management call
    pub provisioning_retry: RetryPolicy,
    pub hasher: PasswordHasher,
}
