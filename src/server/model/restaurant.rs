//! Restaurant domain models and parameters.

use crate::{
    model::restaurant::{RestaurantDetailDto, RestaurantDto},
    server::model::restaurant_pizza::OfferingWithPizza,
};

/// A restaurant without its offerings.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl Restaurant {
    /// Converts an entity model to the restaurant domain model.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    /// Converts the domain model into its shallow DTO.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

/// A restaurant together with every offering and the pizza each offering refers to.
///
/// Offerings are ordered by their ID.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantWithOfferings {
    pub restaurant: Restaurant,
    pub offerings: Vec<OfferingWithPizza>,
}

impl RestaurantWithOfferings {
    /// Converts the domain model into the detailed restaurant DTO.
    ///
    /// Nested pizzas are serialized shallowly, so the output never nests further
    /// than restaurant -> offering -> pizza.
    pub fn into_dto(self) -> RestaurantDetailDto {
        RestaurantDetailDto {
            id: self.restaurant.id,
            name: self.restaurant.name,
            address: self.restaurant.address,
            restaurant_pizzas: self
                .offerings
                .into_iter()
                .map(OfferingWithPizza::into_dto)
                .collect(),
        }
    }
}

/// Parameters for inserting a restaurant.
#[derive(Debug, Clone)]
pub struct CreateRestaurantParams {
    pub name: String,
    pub address: String,
}
