//! Tests for token pair issuing

use chrono::{TimeZone, Utc};
use tk_shared::config::JwtConfig;

use crate::domain::entities::token::SigningDomain;
use crate::errors::DomainError;
use crate::services::token::{TokenIssuer, TokenServiceConfig, TokenVerifier};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::new("access-secret", "refresh-secret")
}

#[test]
fn test_pair_has_two_three_part_tokens() {
    let issuer = TokenIssuer::new(test_config()).unwrap();
    let pair = issuer.create_token_pair("1").unwrap();

    assert_eq!(pair.access_token.split('.').count(), 3);
    assert_eq!(pair.refresh_token.split('.').count(), 3);
    assert_ne!(pair.access_token, pair.refresh_token);
}

#[test]
fn test_expiries_follow_configured_lifetimes() {
    let issuer = TokenIssuer::new(test_config()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let pair = issuer.create_token_pair_at("1", now).unwrap();

    assert_eq!(pair.access_expires_at, now.timestamp() + 60);
    assert_eq!(pair.refresh_expires_at, now.timestamp() + 60 * 24 * 60 * 60);
    assert!(pair.access_expires_at < pair.refresh_expires_at);
}

#[test]
fn test_each_token_carries_user_id_in_its_domain() {
    let config = test_config();
    let issuer = TokenIssuer::new(config.clone()).unwrap();
    let verifier = TokenVerifier::new(&config).unwrap();
    let pair = issuer.create_token_pair("42").unwrap();

    let access = verifier.verify(&pair.access_token, SigningDomain::Access).unwrap();
    let refresh = verifier.verify(&pair.refresh_token, SigningDomain::Refresh).unwrap();

    assert_eq!(access.user_id, "42");
    assert_eq!(refresh.user_id, "42");
    assert_eq!(access.exp, pair.access_expires_at);
    assert_eq!(refresh.exp, pair.refresh_expires_at);
}

#[test]
fn test_empty_access_secret_is_rejected() {
    let result = TokenIssuer::new(TokenServiceConfig::new("", "refresh-secret"));

    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[test]
fn test_empty_secret_from_environment_is_rejected() {
    let jwt = JwtConfig::new("", "refresh-secret");

    assert!(matches!(
        TokenServiceConfig::from_jwt_config(&jwt),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_empty_refresh_secret_is_rejected() {
    assert!(matches!(
        TokenIssuer::new(TokenServiceConfig::new("access-secret", "")),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_access_lifetime_must_be_shorter() {
    let config = TokenServiceConfig {
        access_token_ttl_seconds: 3600,
        refresh_token_ttl_seconds: 60,
        ..test_config()
    };

    assert!(matches!(
        TokenIssuer::new(config),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_from_jwt_config_rejects_non_hmac_algorithm() {
    let mut jwt = tk_shared::config::JwtConfig::new("a", "r");
    jwt.algorithm = "RS256".to_string();

    assert!(matches!(
        TokenServiceConfig::from_jwt_config(&jwt),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_from_jwt_config_copies_secrets_and_lifetimes() {
    let jwt = tk_shared::config::JwtConfig::new("a", "r").with_access_expiry_seconds(120);
    let config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();

    assert_eq!(config.access_secret, "a");
    assert_eq!(config.refresh_secret, "r");
    assert_eq!(config.access_token_ttl_seconds, 120);
    assert_eq!(config.ttl_for(SigningDomain::Refresh), jwt.refresh_token_expiry);
}
