//! Restaurant pizza factory for creating test offerings.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating offerings of a pizza at a restaurant.
///
/// The referenced restaurant and pizza must already exist.
pub struct RestaurantPizzaFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    pizza_id: i32,
    price: i32,
}

impl<'a> RestaurantPizzaFactory<'a> {
    /// Creates a new RestaurantPizzaFactory with a default price of `10`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - ID of the restaurant offering the pizza
    /// - `pizza_id` - ID of the offered pizza
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32, pizza_id: i32) -> Self {
        Self {
            db,
            restaurant_id,
            pizza_id,
            price: 10,
        }
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the offering into the database.
    pub async fn build(self) -> Result<entity::restaurant_pizza::Model, DbErr> {
        entity::restaurant_pizza::ActiveModel {
            id: ActiveValue::NotSet,
            price: ActiveValue::Set(self.price),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            pizza_id: ActiveValue::Set(self.pizza_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an offering with the default price.
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    restaurant_id: i32,
    pizza_id: i32,
) -> Result<entity::restaurant_pizza::Model, DbErr> {
    RestaurantPizzaFactory::new(db, restaurant_id, pizza_id)
        .build()
        .await
}
