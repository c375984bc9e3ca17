//! Integration tests for login, refresh and logout

#[macro_use]
mod common;

use actix_web::test;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use ts_api::app::create_app;
use ts_core::domain::entities::{Claims, DeviceInfo, RefreshToken};
use ts_core::repositories::RefreshTokenRepository;
use ts_core::services::SigningContext;

use common::{bearer, TestContext, EMAIL};

#[actix_web::test]
async fn test_login_returns_token_pair_and_user() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .insert_header(("User-Agent", "integration-test"))
        .insert_header(("X-Forwarded-For", "203.0.113.9"))
        .set_json(json!({ "email": EMAIL, "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User logged in successfully");
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert_eq!(body["data"]["user"]["email"], EMAIL);
    assert!(body["data"]["user"].get("password_hash").is_none());

    let refresh = body["data"]["refresh_token"].as_str().unwrap();
    let stored = ctx.refresh_repo.find_by_token(refresh).await.unwrap().unwrap();
    assert_eq!(stored.user_agent, "integration-test");
    assert_eq!(stored.ip_address, "203.0.113.9");
}

#[actix_web::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": EMAIL, "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_logout_revokes_access_token_on_issuer() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let (access, _) = login!(&app);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(bearer(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], EMAIL);

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .insert_header(bearer(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User logged out successfully");

    // Token has not expired but is now rejected
    assert!(ctx.verifier.validate(&access).is_ok());
    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(bearer(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/auth/validate")
        .insert_header(bearer(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token has been blacklisted");
}

#[actix_web::test]
async fn test_logout_with_refresh_token_deletes_it() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let (access, refresh) = login!(&app);

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .insert_header(bearer(&access))
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(ctx.refresh_repo.is_empty().await);

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_without_credentials_still_succeeds() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post().uri("/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::post()
        .uri("/auth/logout/simple")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_logout_ignores_tokens_signed_with_another_key() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let foreign = SigningContext::new("somebody-elses-secret-of-at-least-32-bytes");
    let mut tokens = Vec::new();
    for i in 0..5 {
        let claims = Claims::for_user(
            format!("user{}@example.com", i),
            i,
            &["USER".to_string()],
            Utc::now(),
            Duration::days(3650),
        );
        tokens.push(foreign.sign(&claims).unwrap());
    }

    for token in &tokens {
        let req = test::TestRequest::post()
            .uri("/auth/logout/simple")
            .insert_header(bearer(token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    for token in &tokens {
        assert!(!ctx.blacklist.is_blacklisted(token).await.unwrap());
    }
    assert_eq!(ctx.blacklist.sweep(Utc::now()).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_refresh_keeps_refresh_token() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let (_, refresh) = login!(&app);

    // camelCase field name is accepted as well
    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refreshToken": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token refreshed successfully");
    assert_eq!(body["data"]["refresh_token"], refresh.as_str());
    let access = body["data"]["access_token"].as_str().unwrap();
    assert_eq!(ctx.verifier.validate(access).unwrap().email(), Some(EMAIL));
}

#[actix_web::test]
async fn test_refresh_with_month_old_token_deletes_it() {
    let ctx = TestContext::new();
    let user = ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let stale = RefreshToken::issue(
        user.id,
        DeviceInfo::default(),
        Utc::now() - Duration::days(31),
        Duration::days(30),
    );
    ctx.refresh_repo.save(stale.clone()).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refresh_token": stale.token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REFRESH_TOKEN_EXPIRED");
    assert!(ctx.refresh_repo.find_by_token(&stale.token).await.unwrap().is_none());

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refresh_token": stale.token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REFRESH_TOKEN_INVALID");
}
