use actix_web::HttpResponse;

use crate::dto::auth::MessageResponse;
use crate::middleware::auth::AuthContext;

/// Handler for PUT /todo/{user_id}
///
/// Protected by [`JwtAuth`](crate::middleware::auth::JwtAuth): reaching the
/// handler means the bearer access token was issued for the path's user.
pub async fn create_todo(auth: AuthContext) -> HttpResponse {
    log::info!("Authorized todo request for user {}", auth.user_id);
    HttpResponse::Ok().json(MessageResponse::new("You are authenticated"))
}
