use actix_web::{web, HttpServer};
use anyhow::Context;
use std::{sync::Arc, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ts_api::{app::create_app, middleware::RequestGate, routes::auth::AppState};
use ts_core::services::{
    AuthService, AuthServiceConfig, PasswordService, RefreshTokenService, ServiceTokenMinter,
    SigningContext, TokenBlacklistService, TokenCleanupConfig, TokenCleanupService, TokenIssuer,
    TokenServiceConfig, TokenVerifier,
};
use ts_infra::clients::{ServiceClient, UserManagementClient};
use ts_infra::database::{
    DatabasePool, MySqlBlacklistRepository, MySqlCredentialRepository,
    MySqlPasswordResetRepository, MySqlRefreshTokenRepository,
};
use ts_infra::notifier::LoggingResetNotifier;
use ts_shared::{AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config.validate().context("Invalid configuration")?;

    info!(environment = ?config.environment, "Starting TeamSync auth service");

    let pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("{}", pool.get_statistics());
    let db = pool.get_pool().clone();

    // Token primitives share one signing context
    let token_config = TokenServiceConfig::from(&config.auth.jwt);
    let signing = Arc::new(SigningContext::new(&token_config.jwt_secret));
    let verifier = TokenVerifier::new(signing.clone());
    let issuer = TokenIssuer::new(signing.clone(), token_config.access_ttl());
    let minter = ServiceTokenMinter::new(
        signing.clone(),
        config.services.service_name.clone(),
        token_config.service_ttl(),
    );

    let credentials = Arc::new(MySqlCredentialRepository::new(db.clone()));
    let resets = Arc::new(MySqlPasswordResetRepository::new(db.clone()));
    let refresh_tokens = Arc::new(RefreshTokenService::new(
        Arc::new(MySqlRefreshTokenRepository::new(db.clone())),
        token_config.refresh_ttl(),
    ));
    let blacklist = Arc::new(TokenBlacklistService::new(
        Arc::new(MySqlBlacklistRepository::new(db)),
        signing.clone(),
    ));

    let user_management = ServiceClient::new(
        &config.services.user_management_url,
        minter,
        Duration::from_secs(config.services.request_timeout_seconds),
    )
    .context("Failed to build user-management client")?;
    let provisioner = Arc::new(UserManagementClient::new(user_management));

    let auth_service = Arc::new(AuthService::new(
        credentials.clone(),
        refresh_tokens.clone(),
        blacklist.clone(),
        issuer,
        verifier.clone(),
        provisioner,
        AuthServiceConfig::default(),
    ));
    let password_service = Arc::new(PasswordService::new(
        credentials,
        resets,
        Arc::new(LoggingResetNotifier::new(
            config.services.password_reset_url.clone(),
        )),
        token_config.password_reset_ttl(),
    ));

    let cleanup = Arc::new(TokenCleanupService::new(
        refresh_tokens,
        blacklist.clone(),
        TokenCleanupConfig::from(&config.cleanup),
    ));
    let _cleanup_task = cleanup.start_background_task();

    let app_state = web::Data::new(AppState {
        auth_service,
        password_service,
    });
    let gate = RequestGate::issuer(verifier, blacklist);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), gate.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    info!("Auth service stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
