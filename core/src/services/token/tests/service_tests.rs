//! Unit tests for token service

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    })
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.issue(user_id).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, "store-rating");
    assert_eq!(claims.exp - claims.iat, service.expiry_seconds());
    assert_eq!(service.user_id_from(&token).unwrap(), user_id);
}

#[test]
fn test_tokens_have_unique_ids() {
    let service = service();
    let user_id = Uuid::new_v4();
    let first = service.verify(&service.issue(user_id).unwrap()).unwrap();
    let second = service.verify(&service.issue(user_id).unwrap()).unwrap();
    assert_ne!(first.jti, second.jti);
}

#[test]
fn test_expired_token_is_rejected() {
    let service = service();
    let mut claims = Claims::new(Uuid::new_v4(), "store-rating", 3600);
    let past = Utc::now().timestamp() - 7200;
    claims.iat = past;
    claims.nbf = past;
    claims.exp = past + 60;

    let token = service.encode_jwt(&claims).unwrap();
    match service.verify(&token).unwrap_err() {
        DomainError::Token(TokenError::TokenExpired) => {}
        other => panic!("Expected TokenExpired, got {:?}", other),
    }
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..Default::default()
    });
    let token = other.issue(Uuid::new_v4()).unwrap();

    match service().verify(&token).unwrap_err() {
        DomainError::Token(TokenError::InvalidSignature) => {}
        other => panic!("Expected InvalidSignature, got {:?}", other),
    }
}

#[test]
fn test_wrong_issuer_is_rejected() {
    let foreign = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        issuer: "someone-else".to_string(),
        ..Default::default()
    });
    let token = foreign.issue(Uuid::new_v4()).unwrap();

    match service().verify(&token).unwrap_err() {
        DomainError::Token(TokenError::InvalidClaims) => {}
        other => panic!("Expected InvalidClaims, got {:?}", other),
    }
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = service().verify("not.a.jwt");
    assert!(matches!(result, Err(DomainError::Token(_))));
}

#[test]
fn test_non_uuid_subject_is_invalid_claims() {
    let service = service();
    let mut claims = Claims::new(Uuid::new_v4(), "store-rating", 3600);
    claims.sub = "admin".to_string();
    let token = service.encode_jwt(&claims).unwrap();

    match service.user_id_from(&token).unwrap_err() {
        DomainError::Token(TokenError::InvalidClaims) => {}
        other => panic!("Expected InvalidClaims, got {:?}", other),
    }
}
