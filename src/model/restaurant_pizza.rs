use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{pizza::PizzaDto, restaurant::RestaurantDto};

/// Offering together with its restaurant and pizza.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaDto {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaDto,
    pub restaurant: RestaurantDto,
}

/// Request body for creating an offering.
///
/// Documents the expected shape only: the handler reads the body as a loose JSON
/// object so numeric strings such as `"5"` are accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaDto {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}
