use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_ISSUER};

#[test]
fn test_claims_embed_user_id() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new(user_id, JWT_ISSUER, 3600);

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.exp - claims.iat, 3600);
    assert!(!claims.is_expired());
}

#[test]
fn test_claims_expiry() {
    let claims = Claims::new(Uuid::new_v4(), JWT_ISSUER, -10);
    assert!(claims.is_expired());
}

#[test]
fn test_unique_jti() {
    let user_id = Uuid::new_v4();
    let a = Claims::new(user_id, JWT_ISSUER, 60);
    let b = Claims::new(user_id, JWT_ISSUER, 60);
    assert_ne!(a.jti, b.jti);
}
