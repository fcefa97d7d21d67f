//! Restaurant pizza (offering) domain models, parameters and validation.
//!
//! An offering is the priced association between one restaurant and one pizza.
//! Creation requests arrive as loosely typed JSON objects; `CreateRestaurantPizzaParams`
//! turns such an object into checked parameters or a `ValidationError`.

use serde_json::{Map, Value};

use crate::{
    model::{restaurant::OfferingWithPizzaDto, restaurant_pizza::RestaurantPizzaDto},
    server::{
        error::validation::ValidationError,
        model::{pizza::Pizza, restaurant::Restaurant},
        util::parse::{coerce_to_i64, is_truthy},
    },
};

/// Lowest price a restaurant may charge for a pizza.
pub const MIN_PRICE: i64 = 1;
/// Highest price a restaurant may charge for a pizza.
pub const MAX_PRICE: i64 = 30;

/// A priced offering of a pizza at a restaurant, referencing both by ID.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

impl RestaurantPizza {
    /// Converts an entity model to the offering domain model.
    pub fn from_entity(entity: entity::restaurant_pizza::Model) -> Self {
        Self {
            id: entity.id,
            price: entity.price,
            restaurant_id: entity.restaurant_id,
            pizza_id: entity.pizza_id,
        }
    }
}

/// An offering with the pizza it refers to, as listed under a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingWithPizza {
    pub offering: RestaurantPizza,
    pub pizza: Pizza,
}

impl OfferingWithPizza {
    pub fn into_dto(self) -> OfferingWithPizzaDto {
        OfferingWithPizzaDto {
            id: self.offering.id,
            price: self.offering.price,
            pizza_id: self.offering.pizza_id,
            restaurant_id: self.offering.restaurant_id,
            pizza: self.pizza.into_dto(),
        }
    }
}

/// An offering with both its restaurant and its pizza.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithParents {
    pub offering: RestaurantPizza,
    pub restaurant: Restaurant,
    pub pizza: Pizza,
}

impl RestaurantPizzaWithParents {
    /// Converts the domain model into the creation response DTO.
    ///
    /// The nested restaurant and pizza are shallow and omit their offerings.
    pub fn into_dto(self) -> RestaurantPizzaDto {
        RestaurantPizzaDto {
            id: self.offering.id,
            price: self.offering.price,
            pizza_id: self.offering.pizza_id,
            restaurant_id: self.offering.restaurant_id,
            pizza: self.pizza.into_dto(),
            restaurant: self.restaurant.into_dto(),
        }
    }
}

/// Checks that a price lies within `MIN_PRICE..=MAX_PRICE`.
///
/// # Returns
/// - `Ok(i32)` - The price, narrowed for storage
/// - `Err(ValidationError::PriceOutOfRange)` - Price outside the accepted range
pub fn validate_price(price: i64) -> Result<i32, ValidationError> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        return Err(ValidationError::PriceOutOfRange(price));
    }

    Ok(price as i32)
}

/// Parameters for creating an offering.
///
/// The price has been range checked. The referenced IDs are integers but have not
/// yet been resolved against the database.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRestaurantPizzaParams {
    pub price: i32,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl CreateRestaurantPizzaParams {
    /// Builds creation parameters from a JSON request object.
    ///
    /// Checks run in a fixed order: every field must be present and truthy, then every
    /// field must convert to an integer, then the price must be in range.
    ///
    /// # Arguments
    /// - `payload` - The request body as a JSON object
    ///
    /// # Returns
    /// - `Ok(CreateRestaurantPizzaParams)` - Validated parameters
    /// - `Err(ValidationError)` - The first check that failed
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        if payload.is_empty() {
            return Err(ValidationError::InvalidBody("empty object".to_string()));
        }

        let price = required_field(payload, "price")?;
        let pizza_id = required_field(payload, "pizza_id")?;
        let restaurant_id = required_field(payload, "restaurant_id")?;

        let price = integer_field(price, "price")?;
        let pizza_id = integer_field(pizza_id, "pizza_id")?;
        let restaurant_id = integer_field(restaurant_id, "restaurant_id")?;

        Ok(Self {
            price: validate_price(price)?,
            pizza_id,
            restaurant_id,
        })
    }
}

fn required_field<'a>(
    payload: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, ValidationError> {
    payload
        .get(name)
        .filter(|value| is_truthy(value))
        .ok_or(ValidationError::MissingField(name))
}

fn integer_field(value: &Value, name: &'static str) -> Result<i64, ValidationError> {
    coerce_to_i64(value).ok_or(ValidationError::NotAnInteger(name))
}
