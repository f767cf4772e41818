pub mod handlers;
pub mod responses;

use axum::{
    Json,
    body::Body,
    extract::{Request, rejection::JsonRejection},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Largest error body [`attach_error_path`] will buffer for rewriting.
const MAX_ERROR_BODY: usize = 64 * 1024;

/// Standard error response structure.
///
/// Every failed request produces this JSON body:
///
/// ```json
/// {
///   "timestamp": "2025-01-12T10:30:00Z",
///   "status": 404,
///   "error": "Not Found",
///   "message": "Producto no encontrado con ID: ...",
///   "path": "/api/productos/..."
/// }
/// ```
///
/// Validation failures additionally carry an `errores` object mapping each
/// offending field to its message.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Moment the error was produced
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status
    pub status: u16,
    /// Canonical reason phrase for the status
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Request path; filled in by [`attach_error_path`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Per-field validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errores: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: None,
            errores: None,
        }
    }

    pub fn with_field_errors(
        mut self,
        errores: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.errores = Some(errores);
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Application error type that converts into the standard error body.
///
/// Domain error enums convert into this type at the HTTP boundary; the
/// variants cover the three kinds of failure the API distinguishes (absent
/// entity, invalid payload, everything else) plus the infrastructure errors
/// that fold into the last kind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorResponse::new(StatusCode::BAD_REQUEST, msg).into_response()
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                ErrorResponse::new(StatusCode::NOT_FOUND, msg).into_response()
            }
            AppError::Validation(errors) => {
                tracing::info!("Validation error: {:?}", errors);
                ErrorResponse::new(StatusCode::BAD_REQUEST, "Error de validación")
                    .with_field_errors(field_errors_map(&errors))
                    .into_response()
            }
            AppError::JsonExtractorRejection(rejection) => {
                tracing::info!("JSON extraction error: {:?}", rejection);
                ErrorResponse::new(rejection.status(), rejection.body_text()).into_response()
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error interno del servidor: {}", err),
                )
                .into_response()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error interno del servidor: {}", msg),
                )
                .into_response()
            }
        }
    }
}

/// Collapse `validator` errors into a field -> message object.
///
/// Each field keeps its first declared message; fields without an explicit
/// message fall back to the validator code.
pub fn field_errors_map(
    errors: &ValidationErrors,
) -> serde_json::Map<String, serde_json::Value> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| {
                    errs.first()
                        .map(|e| e.code.to_string())
                        .unwrap_or_else(|| "invalid".to_string())
                });
            (field.to_string(), serde_json::Value::String(message))
        })
        .collect()
}

/// Middleware that writes the request path into JSON error bodies.
///
/// Handlers build [`ErrorResponse`] without knowing the request URI, so this
/// layer buffers error responses and inserts a `path` field when the body is
/// a JSON object that does not already carry one. Non-JSON and success
/// responses pass through untouched.
pub async fn attach_error_path(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_ERROR_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("DEBUG buffer err: {e}; headers before: {:?}", parts.headers);
            tracing::warn!("Failed to buffer error body: {}", e);
            parts.headers.remove(header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let rewritten = match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(serde_json::Value::Object(mut map)) => {
            if map.get("path").is_none_or(|v| v.is_null()) {
                map.insert("path".to_string(), serde_json::Value::String(path));
            }
            serde_json::to_vec(&map).unwrap_or_else(|_| bytes.to_vec())
        }
        _ => bytes.to_vec(),
    };

    eprintln!("DEBUG rewrite path, {} bytes", rewritten.len());
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(rewritten))
}
