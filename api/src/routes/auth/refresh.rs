use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use tk_core::repositories::{RevocationStore, UserRepository};

use super::AppState;

/// Handler for POST /token/refresh
///
/// Exchanges a refresh token for a new token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "userId": "1",
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unreadable body or missing fields
/// - 401 Unauthorized: Invalid, expired or foreign refresh token
/// - 503 Service Unavailable: Store could not be reached
pub async fn refresh<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .session_manager
        .refresh(&request.user_id, &request.refresh_token)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
