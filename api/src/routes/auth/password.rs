use actix_web::{web, HttpResponse};
use validator::Validate;

use ts_core::errors::AuthError;
use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_shared::ApiResponse;

use crate::dto::auth::{PasswordChangeRequest, PasswordResetConfirmRequest, PasswordResetRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::Authenticated;

use super::AppState;

/// Same answer whether or not the account exists
pub const RESET_REQUESTED: &str = "If the email exists, a password reset link has been sent";

/// Handler for POST /auth/password-change
///
/// ## Errors
/// - 400 Bad Request: Invalid body or wrong current password
/// - 401 Unauthorized: No authenticated principal
/// - 403 Forbidden: Called with a service token
pub async fn change_password<C, R, B, P>(
    state: web::Data<AppState<C, R, B, P>>,
    Authenticated(principal): Authenticated,
    request: web::Json<PasswordChangeRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let email = match principal.email() {
        Some(email) => email,
        None => return handle_domain_error(&AuthError::Forbidden.into()),
    };

    match state
        .password_service
        .change_password(email, &request.current_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("Password changed successfully")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /auth/password-reset-request
pub async fn request_password_reset<C, R, B, P>(
    state: web::Data<AppState<C, R, B, P>>,
    request: web::Json<PasswordResetRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.password_service.request_reset(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message(RESET_REQUESTED)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /auth/password-reset
///
/// Consumes the reset token; it cannot be used a second time.
pub async fn reset_password<C, R, B, P>(
    state: web::Data<AppState<C, R, B, P>>,
    request: web::Json<PasswordResetConfirmRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .password_service
        .reset_password(&request.reset_token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message("Password reset successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
