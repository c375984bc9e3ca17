//! Integration tests for current user, password change and reset

#[macro_use]
mod common;

use actix_web::test;
use serde_json::{json, Value};

use ts_api::app::create_app;

use common::{bearer, TestContext, EMAIL};

const RESET_REQUESTED: &str = "If the email exists, a password reset link has been sent";

#[actix_web::test]
async fn test_change_password() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;
    let (access, _) = login!(&app);

    let req = test::TestRequest::post()
        .uri("/auth/password-change")
        .insert_header(bearer(&access))
        .set_json(json!({ "currentPassword": "wrong", "newPassword": "brand-new" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Current password is incorrect");

    let req = test::TestRequest::post()
        .uri("/auth/password-change")
        .insert_header(bearer(&access))
        .set_json(json!({ "current_password": "secret", "new_password": "brand-new" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password changed successfully");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": EMAIL, "password": "brand-new" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_change_password_requires_authentication() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post()
        .uri("/auth/password-change")
        .set_json(json!({ "current_password": "secret", "new_password": "brand-new" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_password_reset_flow() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    // Unknown email gets the same answer and no link
    let req = test::TestRequest::post()
        .uri("/auth/password-reset-request")
        .set_json(json!({ "email": "nobody@example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], RESET_REQUESTED);
    assert!(ctx.notifier.last_token().is_none());

    let req = test::TestRequest::post()
        .uri("/auth/password-reset-request")
        .set_json(json!({ "email": EMAIL }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], RESET_REQUESTED);
    let token = ctx.notifier.last_token().unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/password-reset")
        .set_json(json!({ "resetToken": token, "newPassword": "after-reset" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password reset successfully");

    // Single use
    let req = test::TestRequest::post()
        .uri("/auth/password-reset")
        .set_json(json!({ "reset_token": token, "new_password": "third-one" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "RESET_TOKEN_INVALID");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": EMAIL, "password": "after-reset" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_update_current_user_forwards_to_user_management() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;
    let (access, _) = login!(&app);

    let req = test::TestRequest::post()
        .uri("/auth/me")
        .insert_header(bearer(&access))
        .set_json(json!({ "name": "Alice Cooper" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["data"], "User profile updated successfully");

    let updates = ctx.provisioner.updates.lock().unwrap().clone();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].email, EMAIL);
    assert_eq!(updates[0].name.as_deref(), Some("Alice Cooper"));
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::get().uri("/auth/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}
