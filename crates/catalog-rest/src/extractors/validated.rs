//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes JSON and validates it with the `validator`
//! crate. Validation errors are returned as 422 Unprocessable Entity with
//! field-level error details inside the standard envelope.

use crate::responses::error_response;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{field_errors, ErrorResponse};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// async fn create_item(ValidatedJson(request): ValidatedJson<CreateItemRequest>) {
///     // request is guaranteed to be valid here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Missing content type, malformed body or wrong field types.
    JsonError(JsonRejection),
    /// Validation error with field-level details.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => error_response(
                rejection.status(),
                ErrorResponse {
                    code: "INVALID_JSON".to_string(),
                    message: format!("Invalid JSON: {}", rejection.body_text()),
                    details: None,
                },
            ),
            Self::ValidationError(errors) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(field_errors(&errors)),
                },
            ),
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
