//! Restaurant pizza data repository for database operations
//!
//! Inserts and reads offerings. Callers are responsible for checking the price range
//! and that the referenced restaurant and pizza exist before calling `create`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::restaurant_pizza::RestaurantPizza;

pub struct RestaurantPizzaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantPizzaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new offering
    ///
    /// # Arguments
    /// - `price` - Price already checked by `validate_price`
    /// - `restaurant_id` - ID of an existing restaurant
    /// - `pizza_id` - ID of an existing pizza
    ///
    /// # Returns
    /// - `Ok(RestaurantPizza)` - The created offering with its assigned ID
    /// - `Err(DbErr)` - Database error during insert, including constraint violations
    pub async fn create(
        &self,
        price: i32,
        restaurant_id: i32,
        pizza_id: i32,
    ) -> Result<RestaurantPizza, DbErr> {
        let offering = entity::restaurant_pizza::ActiveModel {
            price: ActiveValue::Set(price),
            restaurant_id: ActiveValue::Set(restaurant_id),
            pizza_id: ActiveValue::Set(pizza_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RestaurantPizza::from_entity(offering))
    }

    /// Gets all offerings of a restaurant ordered by ID
    pub async fn get_by_restaurant_id(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<RestaurantPizza>, DbErr> {
        let offerings = entity::prelude::RestaurantPizza::find()
            .filter(entity::restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::restaurant_pizza::Column::Id)
            .all(self.db)
            .await?;

        Ok(offerings
            .into_iter()
            .map(RestaurantPizza::from_entity)
            .collect())
    }
}
