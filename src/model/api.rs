use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned when a requested resource does not exist.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when a request fails validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<String>,
}
