//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body and runs the `validator` crate's `Validate` on it.
/// A payload that fails validation never reaches the handler; the client gets
/// a 400 with an `errores` object mapping each field to its message.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct StockUpdate {
///     #[validate(range(min = 0, message = "El stock no puede ser negativo"))]
///     stock: i32,
/// }
///
/// async fn patch_stock(ValidatedJson(body): ValidatedJson<StockUpdate>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
