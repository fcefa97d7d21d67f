//! Restaurant data repository for database operations
//!
//! Provides the `RestaurantRepository` for reading, seeding and deleting restaurants, and
//! the explicit joins that expose a restaurant's offerings and pizzas. Entity models are
//! converted into domain models before leaving this module.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::restaurant_pizza::RestaurantPizzaRepository,
    model::{
        pizza::Pizza,
        restaurant::{CreateRestaurantParams, Restaurant, RestaurantWithOfferings},
        restaurant_pizza::OfferingWithPizza,
    },
};

/// Repository providing database operations for restaurants.
///
/// Generic over the connection so it can run against the pool or inside a transaction.
pub struct RestaurantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantRepository<'a, C> {
    /// Creates a new RestaurantRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new restaurant
    ///
    /// # Returns
    /// - `Ok(Restaurant)` - The created restaurant with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRestaurantParams) -> Result<Restaurant, DbErr> {
        let restaurant = entity::restaurant::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Restaurant::from_entity(restaurant))
    }

    /// Finds a restaurant by ID
    ///
    /// # Returns
    /// - `Ok(Some(Restaurant))` - The restaurant if found
    /// - `Ok(None)` - No restaurant has this ID
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DbErr> {
        let restaurant = entity::prelude::Restaurant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(restaurant.map(Restaurant::from_entity))
    }

    /// Gets all restaurants ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Restaurant>, DbErr> {
        let restaurants = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await?;

        Ok(restaurants
            .into_iter()
            .map(Restaurant::from_entity)
            .collect())
    }

    /// Gets a restaurant with its offerings and the pizza of each offering
    ///
    /// Offerings are ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Some(RestaurantWithOfferings))` - The restaurant and its offerings
    /// - `Ok(None)` - No restaurant has this ID
    /// - `Err(DbErr)` - Database error, or an offering references a missing pizza
    pub async fn get_with_offerings(
        &self,
        id: i32,
    ) -> Result<Option<RestaurantWithOfferings>, DbErr> {
        let Some(restaurant) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let offerings = RestaurantPizzaRepository::new(self.db)
            .get_by_restaurant_id(id)
            .await?;

        let pizza_ids: Vec<i32> = offerings.iter().map(|o| o.pizza_id).collect();
        let pizzas: HashMap<i32, Pizza> = entity::prelude::Pizza::find()
            .filter(entity::pizza::Column::Id.is_in(pizza_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, Pizza::from_entity(p)))
            .collect();

        let offerings = offerings
            .into_iter()
            .map(|offering| {
                let pizza = pizzas.get(&offering.pizza_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Pizza {} referenced by restaurant pizza {} not found",
                        offering.pizza_id, offering.id
                    ))
                })?;

                Ok(OfferingWithPizza { offering, pizza })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(Some(RestaurantWithOfferings {
            restaurant,
            offerings,
        }))
    }

    /// Gets the distinct pizzas a restaurant offers, ordered by pizza ID
    pub async fn get_pizzas(&self, restaurant_id: i32) -> Result<Vec<Pizza>, DbErr> {
        let pizzas = entity::prelude::Pizza::find()
            .join(
                JoinType::InnerJoin,
                entity::pizza::Relation::RestaurantPizza.def(),
            )
            .filter(entity::restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .distinct()
            .order_by_asc(entity::pizza::Column::Id)
            .all(self.db)
            .await?;

        Ok(pizzas.into_iter().map(Pizza::from_entity).collect())
    }

    /// Deletes a restaurant together with all of its offerings
    ///
    /// Offerings are removed explicitly before the restaurant rather than relying on
    /// the foreign key cascade. Run inside a transaction to make both deletes atomic.
    ///
    /// # Returns
    /// - `Ok(true)` - The restaurant existed and was deleted
    /// - `Ok(false)` - No restaurant has this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::RestaurantPizza::delete_many()
            .filter(entity::restaurant_pizza::Column::RestaurantId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
