use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        restaurant::{RestaurantDetailDto, RestaurantDto},
    },
    server::{error::AppError, service::restaurant::RestaurantService, state::AppState},
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

/// Get all restaurants.
///
/// Returns every restaurant ordered by ID, without offerings.
///
/// # Returns
/// - `200 OK` - List of restaurants
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved restaurants", body = Vec<RestaurantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            restaurants
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a restaurant by ID.
///
/// Returns the restaurant with each of its offerings and the offered pizza. A path
/// segment that is not an integer is treated as an unknown restaurant.
///
/// # Returns
/// - `200 OK` - Restaurant with offerings
/// - `404 Not Found` - Restaurant does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved restaurant", body = RestaurantDetailDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Ok(Path(id)) = id else {
        return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));
    };

    let restaurant = RestaurantService::new(&state.db).get_by_id(id).await?;

    match restaurant {
        Some(restaurant) => Ok((StatusCode::OK, Json(restaurant.into_dto()))),
        None => Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string())),
    }
}

/// Delete a restaurant.
///
/// Deletes the restaurant and all of its offerings. Pizzas are left untouched.
///
/// # Returns
/// - `204 No Content` - Restaurant deleted
/// - `404 Not Found` - Restaurant does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted restaurant"),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Ok(Path(id)) = id else {
        return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));
    };

    let deleted = RestaurantService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()))
    }
}
