//! Integration tests for registration

#[macro_use]
mod common;

use actix_web::test;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;

use ts_api::app::create_app;
use ts_core::services::auth::PROFILE_CREATION_FAILED;

use common::TestContext;

fn registration() -> Value {
    json!({
        "name": "Bob",
        "email": "bob@example.com",
        "password": "hunter22",
        "designation": "Engineer",
        "birthdate": "1990-05-17"
    })
}

#[actix_web::test]
async fn test_register_creates_account() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(registration())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 201);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["data"]["email"], "bob@example.com");
    assert_eq!(body["data"]["designation"], "Engineer");

    let created = ctx.provisioner.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].email, "bob@example.com");
    assert_eq!(ctx.credentials.len().await, 1);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "bob@example.com", "password": "hunter22" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_register_duplicate_email() {
    let ctx = TestContext::new();
    ctx.seed_user().await;
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": "Alice", "email": "a@b.com", "password": "another" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_ALREADY_USED");
    assert_eq!(body["message"], "Email is already used with another account");
    assert!(ctx.provisioner.created.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_register_validation_errors() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": "Bob", "email": "nope", "password": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("email"));
    assert!(message.contains("password"));

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_register_collaborator_down_persists_nothing() {
    let ctx = TestContext::new();
    ctx.provisioner.unavailable.store(true, Ordering::SeqCst);
    let app = test::init_service(create_app(ctx.state.clone(), ctx.issuer_gate())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(registration())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], PROFILE_CREATION_FAILED);
    assert_eq!(ctx.credentials.len().await, 0);
}
