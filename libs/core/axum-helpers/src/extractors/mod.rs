//! Custom extractors for Axum handlers.
//!
//! These standardize payload validation and path-parameter parsing so every
//! handler produces the same structured error bodies.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
