use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use tk_core::repositories::{RevocationStore, UserRepository};

use super::AppState;

/// Handler for POST /login
///
/// Exchanges username and password for a token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "username",
///     "password": "password"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unreadable body or empty fields
/// - 401 Unauthorized: Unknown user or wrong password
/// - 422 Unprocessable Entity: Tokens could not be signed
/// - 503 Service Unavailable: Refresh token could not be recorded
pub async fn login<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.username, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
