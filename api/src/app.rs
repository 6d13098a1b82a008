//! Application state and factory
//!
//! This module provides the factory for creating the Actix-web application
//! around an already built session manager.

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use crate::handlers::error::json_error_handler;
use crate::middleware::auth::{BearerAuthorizer, JwtAuth};
use crate::routes::auth::{login::login, logout::logout, refresh::refresh, AppState};
use crate::routes::todo::create_todo;

use tk_core::repositories::{RevocationStore, UserRepository};
use tk_shared::errors::{error_codes, ErrorResponse};

/// Create and configure the application with all dependencies
pub fn create_app<U, S>(
    app_state: web::Data<AppState<U, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
{
    let authorizer: Arc<dyn BearerAuthorizer> = app_state.session_manager.clone();

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check::<U, S>))
        // Session routes
        .route("/login", web::post().to(login::<U, S>))
        .route("/token/refresh", web::post().to(refresh::<U, S>))
        .route("/logout", web::post().to(logout::<U, S>))
        // Protected routes
        .service(
            web::resource("/todo/{user_id}")
                .wrap(JwtAuth::new(authorizer))
                .route(web::put().to(create_todo)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check<U, S>(state: web::Data<AppState<U, S>>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
{
    let store_up = state.session_manager.store_health().await;

    HttpResponse::Ok().json(serde_json::json!({
        "status": if store_up { "healthy" } else { "degraded" },
        "store": if store_up { "up" } else { "down" },
        "service": "tokenkeeper-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
