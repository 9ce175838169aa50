//! Request handlers

pub mod health;
pub mod planets;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use holocron_domain::{ErrorKind, PlanetError};
use tracing::{error, info};

use crate::dto::planet::ErrorResponse;

/// HTTP status for each kind of domain failure
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput | ErrorKind::Conflict | ErrorKind::Validation => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turn a domain error into the `{"error": ...}` envelope
///
/// Internal failures are logged with their cause and masked for the client.
pub fn error_response(err: PlanetError) -> Response {
    let status = status_for(err.kind());
    if status.is_server_error() {
        error!(error = %err, kind = %err.kind(), "Request failed");
    } else {
        info!(error = %err, kind = %err.kind(), "Request rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.client_message(),
        }),
    )
        .into_response()
}

/// A 400 response for input rejected before reaching the service
pub fn bad_request(message: &str) -> Response {
    error_response(PlanetError::invalid_input(message))
}

/// Fallback for paths no route matches
pub async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
