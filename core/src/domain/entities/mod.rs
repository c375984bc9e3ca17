//! Domain entities of the identity layer.

pub mod blacklisted_token;
pub mod claims;
pub mod credential;
pub mod password_reset;
pub mod principal;
pub mod refresh_token;


pub use blacklisted_token::BlacklistedToken;
pub use claims::{Claims, SERVICE_SUFFIX};
pub use credential::{Credential, NewCredential};
pub use password_reset::PasswordResetToken;
pub use principal::{Principal, AUTHORITY_SERVICE, AUTHORITY_USER};
pub use refresh_token::{DeviceInfo, RefreshToken, UNKNOWN_DEVICE_VALUE};
