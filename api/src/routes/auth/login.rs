use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_shared::ApiResponse;

use crate::dto::auth::LoginRequest;
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::{device_info, AppState};

/// Handler for POST /auth/login
///
/// Returns the user view with an access token and an opaque refresh token.
/// The refresh token is bound to the caller's user agent and address.
///
/// ## Errors
/// - 400 Bad Request: Invalid body
/// - 401 Unauthorized: Unknown email, inactive account or wrong password
pub async fn login<C, R, B, P>(
    req: HttpRequest,
    state: web::Data<AppState<C, R, B, P>>,
    request: web::Json<LoginRequest>,
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

    let device = device_info(&req);
    match state
        .auth_service
        .login(&request.email, &request.password, device)
        .await
    {
        Ok(response) => {
            HttpResponse::Ok().json(ApiResponse::success("User logged in successfully", response))
        }
        Err(error) => handle_domain_error(&error),
    }
}
