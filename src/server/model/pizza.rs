//! Pizza domain model and parameters.

use crate::model::pizza::PizzaDto;

/// A pizza recipe that restaurants may offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl Pizza {
    /// Converts an entity model to the pizza domain model.
    pub fn from_entity(entity: entity::pizza::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            ingredients: entity.ingredients,
        }
    }

    /// Converts the domain model into its shallow DTO.
    pub fn into_dto(self) -> PizzaDto {
        PizzaDto {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}

/// Parameters for inserting a pizza.
#[derive(Debug, Clone)]
pub struct CreatePizzaParams {
    pub name: String,
    pub ingredients: String,
}
