use actix_web::HttpResponse;

use ts_shared::HealthResponse;

pub const SERVICE_NAME: &str = "teamsync-auth";

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
