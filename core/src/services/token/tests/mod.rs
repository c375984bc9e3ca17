//! Tests for the token services

use std::sync::Arc;

use crate::services::token::SigningContext;

mod signing_tests;

pub(crate) const TEST_SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

pub(crate) fn signing() -> Arc<SigningContext> {
    Arc::new(SigningContext::new(TEST_SECRET))
}
