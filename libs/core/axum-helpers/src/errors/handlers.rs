use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fallback handler for routes that do not exist.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
    .into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "The HTTP method is not allowed for this resource",
    )
    .into_response()
}
