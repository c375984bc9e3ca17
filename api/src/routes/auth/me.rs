use actix_web::{web, HttpResponse};
use validator::Validate;

use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_shared::ApiResponse;

use crate::dto::auth::UpdateUserRequest;
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::Authenticated;

use super::AppState;

/// Handler for GET /auth/me
///
/// Requires a user principal; service tokens get 403.
pub async fn current_user<C, R, B, P>(
    state: web::Data<AppState<C, R, B, P>>,
    Authenticated(principal): Authenticated,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    match state.auth_service.current_user(&principal).await {
        Ok(user) => HttpResponse::Ok()
            .json(ApiResponse::success("Current user retrieved successfully", user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /auth/me
///
/// Forwards the update to the user-management service on behalf of the
/// authenticated user.
pub async fn update_current_user<C, R, B, P>(
    state: web::Data<AppState<C, R, B, P>>,
    Authenticated(principal): Authenticated,
    request: web::Json<UpdateUserRequest>,
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

    let name = request.into_inner().name;
    match state.auth_service.update_current_user(&principal, name).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(
            "User updated successfully",
            "User profile updated successfully",
        )),
        Err(error) => handle_domain_error(&error),
    }
}
