use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::pizza::PizzaDto;

/// Restaurant without its offerings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Restaurant including every offering and the pizza each offering refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetailDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<OfferingWithPizzaDto>,
}

/// Offering nested inside a restaurant; the owning restaurant is not repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OfferingWithPizzaDto {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaDto,
}
