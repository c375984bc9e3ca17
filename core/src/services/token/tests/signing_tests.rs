//! Unit tests for the signing context

use chrono::{Duration, Utc};

use crate::domain::entities::Claims;
use crate::errors::TokenError;
use crate::services::token::SigningContext;

use super::{signing, TEST_SECRET};

fn sample_claims() -> Claims {
    Claims::for_user("a@b.com", 1, &["USER".to_string()], Utc::now(), Duration::seconds(12_000))
}

#[test]
fn test_sign_and_verify_round_trip() {
    let ctx = signing();
    let claims = sample_claims();

    let token = ctx.sign(&claims).unwrap();
    assert_eq!(token.split('.').count(), 3);
    assert_eq!(ctx.verify(&token).unwrap(), claims);
}

#[test]
fn test_every_payload_mutation_breaks_signature() {
    let ctx = signing();
    let token = ctx.sign(&sample_claims()).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let payload = parts[1];

    for i in 0..payload.len() {
        let mut bytes = payload.as_bytes().to_vec();
        bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
        let mutated_payload = String::from_utf8(bytes).unwrap();
        let mutated = format!("{}.{}.{}", parts[0], mutated_payload, parts[2]);

        assert_eq!(
            ctx.verify(&mutated),
            Err(TokenError::SignatureInvalid),
            "mutation at payload byte {} was accepted",
            i
        );
    }
}

#[test]
fn test_signature_mutation_is_rejected() {
    let ctx = signing();
    let token = ctx.sign(&sample_claims()).unwrap();

    let (message, signature) = token.rsplit_once('.').unwrap();
    let mut bytes = signature.as_bytes().to_vec();
    let mid = bytes.len() / 2;
    bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
    let mutated = format!("{}.{}", message, String::from_utf8(bytes).unwrap());

    assert_eq!(ctx.verify(&mutated), Err(TokenError::SignatureInvalid));
}

#[test]
fn test_foreign_key_is_rejected() {
    let ours = signing();
    let theirs = SigningContext::new("a-completely-different-secret-of-32-bytes");

    let token = theirs.sign(&sample_claims()).unwrap();
    assert_eq!(ours.verify(&token), Err(TokenError::SignatureInvalid));
}

#[test]
fn test_unparseable_tokens_are_malformed() {
    let ctx = signing();
    assert_eq!(ctx.verify("not-a-token"), Err(TokenError::MalformedToken));
    assert_eq!(ctx.verify("a.b"), Err(TokenError::MalformedToken));
    assert_eq!(ctx.verify(""), Err(TokenError::MalformedToken));
}

#[test]
fn test_verify_returns_expired_claims() {
    let ctx = SigningContext::new(TEST_SECRET);
    let issued = Utc::now() - Duration::hours(10);
    let claims = Claims::for_user("a@b.com", 1, &[], issued, Duration::seconds(60));

    let token = ctx.sign(&claims).unwrap();
    let decoded = ctx.verify(&token).unwrap();
    assert!(decoded.is_expired_at(Utc::now()));
}
