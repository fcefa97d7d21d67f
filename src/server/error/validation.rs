use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Message returned to clients for every validation failure.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Reasons a restaurant pizza creation request can be rejected.
///
/// Every variant produces the same client-facing body; the variant itself is only
/// logged so operators can tell the cases apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is absent, malformed, or not a non-empty JSON object.
    #[error("Request body is missing or is not a JSON object: {0}")]
    InvalidBody(String),

    /// Required field is missing or falsy (`null`, `0`, `""`, `false`, empty collection).
    #[error("Field '{0}' is missing or empty")]
    MissingField(&'static str),

    /// Field value cannot be converted to an integer.
    #[error("Field '{0}' is not an integer")]
    NotAnInteger(&'static str),

    /// Price is outside the accepted range of 1 to 30.
    #[error("Price must be between 1 and 30, got {0}")]
    PriceOutOfRange(i64),

    /// Referenced restaurant does not exist.
    #[error("Restaurant {0} does not exist")]
    UnknownRestaurant(i64),

    /// Referenced pizza does not exist.
    #[error("Pizza {0} does not exist")]
    UnknownPizza(i64),
}

/// Converts validation errors into a 400 Bad Request with the generic error list.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                errors: vec![VALIDATION_ERRORS.to_string()],
            }),
        )
            .into_response()
    }
}
