use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;

use ts_core::errors::{DomainError, TokenError};
use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_core::services::token::{strip_bearer, BEARER_PREFIX};
use ts_shared::{error_codes, ApiResponse, ErrorResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::authorization_header;

use super::AppState;

/// Handler for GET /auth/validate
///
/// Issuer-side check used by other services: revocation first, then
/// signature and expiry.
///
/// ## Responses
/// - 200 OK: `data` is `true`
/// - 400 Bad Request: No `Bearer` scheme in the header
/// - 403 Forbidden: Token blacklisted or invalid
pub async fn validate_token<C, R, B, P>(
    req: HttpRequest,
    state: web::Data<AppState<C, R, B, P>>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    let header = match authorization_header(&req) {
        Some(header) if header.starts_with(BEARER_PREFIX) => header,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::BAD_REQUEST,
                "No valid token provided",
            ))
        }
    };

    match state.auth_service.validate_token(strip_bearer(&header)).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::success("Token validation completed", true)),
        Err(DomainError::Token(TokenError::TokenBlacklisted)) => HttpResponse::Forbidden().json(
            ErrorResponse::new(error_codes::TOKEN_BLACKLISTED, "Token has been blacklisted"),
        ),
        Err(DomainError::Token(e)) if e.is_verification_failure() => {
            debug!(error = %e, "Token failed validation");
            HttpResponse::Forbidden()
                .json(ErrorResponse::new(error_codes::TOKEN_INVALID, "Token is invalid"))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /auth/blacklist/check
///
/// Answers with a bare JSON boolean. A missing header is never blacklisted.
pub async fn check_blacklist<C, R, B, P>(
    req: HttpRequest,
    state: web::Data<AppState<C, R, B, P>>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    let header = match authorization_header(&req) {
        Some(header) => header,
        None => return HttpResponse::Ok().json(false),
    };

    match state.auth_service.is_token_blacklisted(&header).await {
        Ok(blacklisted) => HttpResponse::Ok().json(blacklisted),
        Err(error) => handle_domain_error(&error),
    }
}
