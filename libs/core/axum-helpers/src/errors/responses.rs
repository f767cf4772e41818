//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use utoipa::ToResponse;

/// 404 response for id-keyed lookups
#[derive(ToResponse)]
#[response(description = "Resource not found", content_type = "application/json")]
pub struct NotFoundResponse(#[allow(dead_code)] ErrorResponse);

/// 400 response for payloads that fail field validation
#[derive(ToResponse)]
#[response(
    description = "Request validation failed; `errores` maps each field to its message",
    content_type = "application/json"
)]
pub struct BadRequestValidationResponse(#[allow(dead_code)] ErrorResponse);

/// 400 response for malformed UUID path parameters
#[derive(ToResponse)]
#[response(description = "Invalid UUID in path", content_type = "application/json")]
pub struct BadRequestUuidResponse(#[allow(dead_code)] ErrorResponse);

/// 500 response for unhandled errors
#[derive(ToResponse)]
#[response(description = "Internal server error", content_type = "application/json")]
pub struct InternalServerErrorResponse(#[allow(dead_code)] ErrorResponse);
