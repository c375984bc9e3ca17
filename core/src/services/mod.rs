//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod provisioning;
pub mod refresh;
pub mod revocation;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use password::{PasswordHasher, PasswordService, ResetNotifier};
pub use provisioning::{RetryPolicy, RetryingProvisioner, UserProvisioner};
pub use refresh::RefreshTokenService;
pub use revocation::{RevocationList, TokenBlacklistService};
pub use token::{
    strip_bearer, CleanupResult, ServiceTokenMinter, SigningContext, TokenCleanupConfig,
    TokenCleanupService, TokenIssuer, TokenServiceConfig, TokenVerifier,
};
