use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, pizza::PizzaDto},
    server::{error::AppError, service::pizza::PizzaService, state::AppState},
};

/// Tag for grouping pizza endpoints in OpenAPI documentation
pub static PIZZA_TAG: &str = "pizza";

/// Get all pizzas.
///
/// Returns every pizza ordered by ID, without offerings.
#[utoipa::path(
    get,
    path = "/pizzas",
    tag = PIZZA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pizzas", body = Vec<PizzaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = PizzaService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(pizzas.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}
