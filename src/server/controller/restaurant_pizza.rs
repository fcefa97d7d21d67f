use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        restaurant_pizza::{CreateRestaurantPizzaDto, RestaurantPizzaDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::restaurant_pizza::CreateRestaurantPizzaParams,
        service::restaurant_pizza::RestaurantPizzaService,
        state::AppState,
    },
};

/// Tag for grouping restaurant pizza endpoints in OpenAPI documentation
pub static RESTAURANT_PIZZA_TAG: &str = "restaurant_pizza";

/// Create a restaurant pizza.
///
/// Offers an existing pizza at an existing restaurant for a price between 1 and 30.
/// Fields may be JSON integers or numeric strings. Every failure, including a missing
/// or malformed body, yields the same generic validation error.
///
/// # Returns
/// - `201 Created` - Offering with its restaurant and pizza
/// - `400 Bad Request` - Body, field, price or reference failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = RESTAURANT_PIZZA_TAG,
    request_body = CreateRestaurantPizzaDto,
    responses(
        (status = 201, description = "Successfully created restaurant pizza", body = RestaurantPizzaDto),
        (status = 400, description = "Validation errors", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| ValidationError::InvalidBody(e.body_text()))?;

    let params = CreateRestaurantPizzaParams::from_payload(&payload)?;

    let restaurant_pizza = RestaurantPizzaService::new(&state.db)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(restaurant_pizza.into_dto())))
}
