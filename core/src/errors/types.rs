//! Error types for authentication and token handling

use thiserror::Error;
use ts_shared::error_codes;

/// Authentication-related errors
///
/// Unknown email, inactive account and wrong password all collapse to
/// `InvalidCredentials` so that responses do not reveal which accounts exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email is already used with another account")]
    EmailAlreadyUsed,

    #[error("Current password is incorrect")]
    IncorrectCurrentPassword,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Access denied")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::EmailAlreadyUsed => error_codes::EMAIL_ALREADY_USED,
            AuthError::IncorrectCurrentPassword => error_codes::INCORRECT_PASSWORD,
            AuthError::Unauthenticated => error_codes::UNAUTHORIZED,
            AuthError::Forbidden => error_codes::FORBIDDEN,
            AuthError::UserNotFound => error_codes::USER_NOT_FOUND,
        }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token signature")]
    SignatureInvalid,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token has been blacklisted")]
    TokenBlacklisted,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token expired")]
    ExpiredRefreshToken,

    /// Neither an email nor a service-suffixed subject was present
    #[error("Unrecognized principal")]
    UnrecognizedPrincipal,

    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::MalformedToken => error_codes::TOKEN_MALFORMED,
            TokenError::SignatureInvalid => error_codes::TOKEN_INVALID,
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::TokenBlacklisted => error_codes::TOKEN_BLACKLISTED,
            TokenError::InvalidRefreshToken => error_codes::REFRESH_TOKEN_INVALID,
            TokenError::ExpiredRefreshToken => error_codes::REFRESH_TOKEN_EXPIRED,
            TokenError::UnrecognizedPrincipal => error_codes::TOKEN_INVALID,
            TokenError::InvalidResetToken => error_codes::RESET_TOKEN_INVALID,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
        }
    }

    /// Failures of the token itself, as opposed to issuer-side faults
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            TokenError::MalformedToken
                | TokenError::SignatureInvalid
                | TokenError::TokenExpired
                | TokenError::TokenBlacklisted
                | TokenError::UnrecognizedPrincipal
        )
    }
}
