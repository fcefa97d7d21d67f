use sea_orm::DatabaseConnection;

use crate::server::{
    data::pizza::PizzaRepository,
    error::AppError,
    model::{pizza::Pizza, restaurant::Restaurant},
};

pub struct PizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pizza without offerings, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Pizza>, AppError> {
        let pizzas = PizzaRepository::new(self.db).get_all().await?;

        Ok(pizzas)
    }

    /// Gets the restaurants offering a pizza
    pub async fn get_restaurants(&self, id: i32) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = PizzaRepository::new(self.db).get_restaurants(id).await?;

        Ok(restaurants)
    }
}
