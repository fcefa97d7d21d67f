use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pizza::PizzaDto,
        restaurant::{OfferingWithPizzaDto, RestaurantDetailDto, RestaurantDto},
        restaurant_pizza::{CreateRestaurantPizzaDto, RestaurantPizzaDto},
    },
    server::{
        controller::{index, pizza, restaurant, restaurant_pizza},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        restaurant::get_restaurants,
        restaurant::get_restaurant_by_id,
        restaurant::delete_restaurant,
        pizza::get_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        PizzaDto,
        RestaurantDto,
        RestaurantDetailDto,
        OfferingWithPizzaDto,
        RestaurantPizzaDto,
        CreateRestaurantPizzaDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/restaurants", get(restaurant::get_restaurants))
        .route(
            "/restaurants/{id}",
            get(restaurant::get_restaurant_by_id).delete(restaurant::delete_restaurant),
        )
        .route("/pizzas", get(pizza::get_pizzas))
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizza::create_restaurant_pizza),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
