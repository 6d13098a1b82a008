use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LogoutRequest, MessageResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use tk_core::repositories::{RevocationStore, UserRepository};

use super::AppState;

/// Handler for POST /logout
///
/// Removes the user's refresh token so it can no longer be exchanged.
/// Access tokens already issued remain valid until they expire.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "User successfully logged out"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unreadable body or missing `userId`
/// - 503 Service Unavailable: Store could not be reached
pub async fn logout<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.session_manager.logout(&request.user_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("User successfully logged out")),
        Err(error) => handle_domain_error(&error),
    }
}
