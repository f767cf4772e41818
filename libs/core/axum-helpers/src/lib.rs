//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP services in this
//! workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured JSON error responses (timestamp, status,
//!   message, request path) and the middleware that fills in the path
//! - **[`extractors`]**: custom extractors (UUID path, validated JSON)
//! - **[`server`]**: router/server setup, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{
    cors_layer_from_env, create_cors_layer, create_permissive_cors_layer, security_headers,
};

// Re-export error types
pub use errors::{AppError, ErrorResponse, attach_error_path};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
