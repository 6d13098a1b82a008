//! Bearer authentication middleware for protecting per-user endpoints.
//!
//! The middleware reads the `Authorization` header and the `user_id` path
//! parameter, asks the session layer to authorize the pair, and injects an
//! [`AuthContext`] into the request on success. Failures are answered here
//! with the shared JSON error body.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use tk_core::{
    domain::entities::token::Claims,
    errors::{DomainError, DomainResult, TokenError},
    repositories::{RevocationStore, UserRepository},
    services::session::SessionManager,
};

use crate::handlers::error::handle_domain_error;

/// Path parameter naming the user a protected route acts for
pub const USER_ID_PARAM: &str = "user_id";

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID the access token was issued for
    pub user_id: String,
    /// Access token expiry (seconds since epoch)
    pub expires_at: i64,
}

impl AuthContext {
    /// Creates a new authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            expires_at: claims.exp,
        }
    }
}

/// Object-safe view of the session manager used by the middleware
#[async_trait]
pub trait BearerAuthorizer: Send + Sync {
    async fn authorize_bearer(&self, user_id: &str, header: &str) -> DomainResult<Claims>;
}

#[async_trait]
impl<U, S> BearerAuthorizer for SessionManager<U, S>
where
    U: UserRepository,
    S: RevocationStore,
{
    async fn authorize_bearer(&self, user_id: &str, header: &str) -> DomainResult<Claims> {
        SessionManager::authorize_bearer(self, user_id, header).await
    }
}

/// Bearer authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    authorizer: Arc<dyn BearerAuthorizer>,
}

impl JwtAuth {
    /// Creates the middleware around an authorizer
    pub fn new(authorizer: Arc<dyn BearerAuthorizer>) -> Self {
        Self { authorizer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            authorizer: Arc::clone(&self.authorizer),
        }))
    }
}

/// Bearer authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    authorizer: Arc<dyn BearerAuthorizer>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authorizer = Arc::clone(&self.authorizer);

        Box::pin(async move {
            let header = match authorization_header(&req) {
                Some(header) => header,
                None => return Ok(reject(req, &DomainError::from(TokenError::MissingToken))),
            };
            let user_id = req
                .match_info()
                .get(USER_ID_PARAM)
                .unwrap_or_default()
                .to_string();

            match authorizer.authorize_bearer(&user_id, &header).await {
                Ok(claims) => {
                    req.extensions_mut().insert(AuthContext::from_claims(claims));
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(e) => Ok(reject(req, &e)),
            }
        })
    }
}

/// Raw `Authorization` header value, if present and readable
fn authorization_header(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .map(|s| s.to_string())
}

fn reject<B>(req: ServiceRequest, error: &DomainError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(handle_domain_error(error)).map_into_right_body()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(
            authorization_header(&req),
            Some("Bearer test_token_123".to_string())
        );

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(authorization_header(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_from_claims() {
        let context = AuthContext::from_claims(Claims {
            user_id: "1".to_string(),
            exp: 1_700_000_000,
        });

        assert_eq!(context.user_id, "1");
        assert_eq!(context.expires_at, 1_700_000_000);
    }
}
