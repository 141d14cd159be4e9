//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::first_validation_message;

/// JSON extractor that automatically validates the payload.
///
/// Malformed bodies and failed validation both reject with a 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e.body_text(), "failed to parse request body");
            AppError::bad_request("Invalid request body")
        })?;

        value.validate().map_err(|e| {
            let message = first_validation_message(&e);
            tracing::warn!(error = %message, "validation failed");
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}
