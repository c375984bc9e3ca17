use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use ts_core::domain::value_objects::Registration;
use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_shared::ApiResponse;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /auth/register
///
/// Provisions the profile in the user-management service, then stores the
/// credential.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "code": 201,
///     "message": "User registered successfully",
///     "data": { "id": 1, "name": "Ada", "email": "ada@example.com", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body or email already used
/// - 502 Bad Gateway: User-management service unavailable after retries
pub async fn register<C, R, B, P>(
    state: web::Data<AppState<C, R, B, P>>,
    request: web::Json<RegisterRequest>,
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

    let registration = Registration::from(request.into_inner());
    match state.auth_service.register(registration).await {
        Ok(user) => {
            info!(user_id = user.id, "Registered new account");
            HttpResponse::Created().json(ApiResponse::created("User registered successfully", user))
        }
        Err(error) => handle_domain_error(&error),
    }
}
