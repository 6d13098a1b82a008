//! Integration test walking one user through the whole credential lifecycle

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tk_core::domain::entities::token::SigningDomain;
    use tk_core::errors::{AuthError, DomainError, StoreError};
    use tk_core::repositories::{
        InMemoryRevocationStore, InMemoryUserRepository, RevocationStore,
    };
    use tk_core::services::{SessionManager, TokenServiceConfig, TokenVerifier};
    use tk_core::User;
    use tk_shared::config::{JwtConfig, SessionConfig};

    #[tokio::test]
    async fn test_full_lifecycle_with_rotation() {
        let jwt = JwtConfig::new("integration-access", "integration-refresh");
        let token_config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();
        let verifier = TokenVerifier::new(&token_config).unwrap();

        let users = Arc::new(InMemoryUserRepository::with_users([
            User::new("1", "alice", "wonderland"),
            User::new("2", "bob", "builder"),
        ]));
        let store = Arc::new(InMemoryRevocationStore::new());
        let manager = SessionManager::new(
            users,
            store.clone(),
            token_config,
            SessionConfig { enforce_rotation: true },
        )
        .unwrap();

        // Anonymous -> Authenticated
        let alice = manager.login("alice", "wonderland").await.unwrap();
        let bob = manager.login("bob", "builder").await.unwrap();
        assert_eq!(store.len().await, 2);

        let claims = verifier.verify(&alice.access_token, SigningDomain::Access).unwrap();
        assert_eq!(claims.user_id, "1");
        assert!(manager.authorize("1", &alice.access_token).await.is_ok());

        // Bob's refresh token cannot be used for Alice
        assert_eq!(
            manager.refresh("1", &bob.refresh_token).await,
            Err(DomainError::Auth(AuthError::Unauthorized))
        );

        let refreshed = manager.refresh("1", &alice.refresh_token).await.unwrap();
        assert_eq!(store.get("1").await.unwrap(), refreshed.refresh_token);

        // Authenticated -> LoggedOut; other users are untouched
        manager.logout("1").await.unwrap();
        assert_eq!(store.get("1").await, Err(StoreError::NotFound));
        assert_eq!(store.get("2").await.unwrap(), bob.refresh_token);
        assert_eq!(
            manager.refresh("1", &refreshed.refresh_token).await,
            Err(DomainError::Auth(AuthError::Unauthorized))
        );

        // LoggedOut -> Authenticated again
        let again = manager.login("alice", "wonderland").await.unwrap();
        assert!(manager.refresh("1", &again.refresh_token).await.is_ok());
    }
}
