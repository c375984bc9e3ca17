use actix_web::{web, HttpResponse};
use validator::Validate;

use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_shared::ApiResponse;

use crate::dto::auth::RefreshTokenRequest;
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /auth/refresh
///
/// Exchanges a refresh token for a new access token. The refresh token
/// itself is returned unchanged.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "6f1c0f3e-..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown or expired refresh token
pub async fn refresh<C, R, B, P>(
    state: web::Data<AppState<C, R, B, P>>,
    request: web::Json<RefreshTokenRequest>,
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

    match state.auth_service.refresh_token(&request.refresh_token).await {
        Ok(tokens) => {
            HttpResponse::Ok().json(ApiResponse::success("Token refreshed successfully", tokens))
        }
        Err(error) => handle_domain_error(&error),
    }
}
