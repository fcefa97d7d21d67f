use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::restaurant::RestaurantRepository,
    error::AppError,
    model::{
        pizza::Pizza,
        restaurant::{Restaurant, RestaurantWithOfferings},
    },
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every restaurant without offerings, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = RestaurantRepository::new(self.db).get_all().await?;

        Ok(restaurants)
    }

    /// Gets a restaurant with its offerings and their pizzas
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RestaurantWithOfferings>, AppError> {
        let restaurant = RestaurantRepository::new(self.db)
            .get_with_offerings(id)
            .await?;

        Ok(restaurant)
    }

    /// Gets the pizzas offered by a restaurant
    pub async fn get_pizzas(&self, id: i32) -> Result<Vec<Pizza>, AppError> {
        let pizzas = RestaurantRepository::new(self.db).get_pizzas(id).await?;

        Ok(pizzas)
    }

    /// Deletes a restaurant and its offerings in a single transaction
    ///
    /// Returns true if deleted, false if the restaurant does not exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = RestaurantRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted restaurant {} and its offerings", id);
        }

        Ok(deleted)
    }
}
