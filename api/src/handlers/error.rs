//! Mapping of domain failures onto HTTP responses
//!
//! Each `DomainError` variant maps to exactly one status code; bodies use the
//! shared `ErrorResponse` shape.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use validator::ValidationErrors;

use tk_core::errors::{AuthError, DomainError, StoreError, TokenError};
use tk_shared::errors::{error_codes, ErrorResponse};

/// Status code and error code for a domain error
pub fn status_for(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
        }
        DomainError::Auth(AuthError::ClaimsUserMismatch | AuthError::Unauthorized) => {
            (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED)
        }
        DomainError::Token(TokenError::MissingToken) => {
            (StatusCode::UNAUTHORIZED, error_codes::MISSING_TOKEN)
        }
        DomainError::Token(TokenError::Expired) => {
            (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED)
        }
        DomainError::Token(
            TokenError::Malformed
            | TokenError::AlgorithmMismatch { .. }
            | TokenError::SignatureMismatch,
        ) => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
        DomainError::Token(TokenError::SigningFailure { .. }) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error_codes::SIGNING_FAILED)
        }
        DomainError::Store(StoreError::Unavailable { .. }) => {
            (StatusCode::SERVICE_UNAVAILABLE, error_codes::STORE_UNAVAILABLE)
        }
        DomainError::Store(StoreError::NotFound) => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Client-facing message; store and signing details stay in the logs
fn public_message(error: &DomainError) -> String {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            "Please provide valid login details".to_string()
        }
        DomainError::Store(StoreError::Unavailable { .. }) => {
            "Session store is temporarily unavailable. Please try again later".to_string()
        }
        DomainError::Token(TokenError::SigningFailure { .. }) => {
            "Tokens could not be created".to_string()
        }
        DomainError::Internal { .. } => "An internal error occurred".to_string(),
        other => other.to_string(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = status_for(error);

    if status.is_server_error() {
        log::error!("Domain Error: {}", error);
    } else {
        log::info!("Request rejected: {}", error);
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, public_message(error)))
}

/// Respond with 400 for a body that failed field validation
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    log::info!("Request rejected: invalid fields {:?}", errors.field_errors().keys());
    HttpResponse::BadRequest().json(response)
}

/// Error handler for `web::JsonConfig`; unreadable bodies become 400
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::info!("Request rejected: invalid JSON body: {}", error);
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, "Invalid request body"));
    InternalError::from_response(error, response).into()
}
