//! Unit tests for token entities

use chrono::{TimeZone, Utc};
use crate::domain::entities::token::{
    Claims, SigningDomain, ACCESS_TOKEN_TTL_SECONDS, REFRESH_TOKEN_TTL_SECONDS,
};

#[test]
fn test_default_lifetimes_are_ordered() {
    assert_eq!(ACCESS_TOKEN_TTL_SECONDS, 60);
    assert_eq!(REFRESH_TOKEN_TTL_SECONDS, 60 * 86400);
    assert!(ACCESS_TOKEN_TTL_SECONDS < REFRESH_TOKEN_TTL_SECONDS);
}

#[test]
fn test_claims_new() {
    let expires_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let claims = Claims::new("1", expires_at);

    assert_eq!(claims.user_id, "1");
    assert_eq!(claims.exp, expires_at.timestamp());
    assert!(claims.belongs_to("1"));
    assert!(!claims.belongs_to("2"));
}

#[test]
fn test_claims_serialization_shape() {
    let claims = Claims { user_id: "42".to_string(), exp: 1_700_000_000 };
    let json = serde_json::to_value(&claims).unwrap();

    assert_eq!(json, serde_json::json!({ "user_id": "42", "exp": 1_700_000_000 }));
}

#[test]
fn test_signing_domain_display() {
    assert_eq!(SigningDomain::Access.to_string(), "access");
    assert_eq!(SigningDomain::Refresh.to_string(), "refresh");
}
