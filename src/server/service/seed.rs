//! Sample data for a fresh database.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        pizza::PizzaRepository, restaurant::RestaurantRepository,
        restaurant_pizza::RestaurantPizzaRepository,
    },
    error::AppError,
    model::{pizza::CreatePizzaParams, restaurant::CreateRestaurantParams},
};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// Offerings as (restaurant index, pizza index, price).
const OFFERINGS: [(usize, usize, i32); 3] = [(0, 0, 1), (1, 1, 4), (2, 2, 5)];

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the sample restaurants, pizzas and offerings if both tables are empty
    ///
    /// # Returns
    /// - `Ok(true)` - Sample data was inserted
    /// - `Ok(false)` - The database already holds restaurants or pizzas
    /// - `Err(AppError::DbErr)` - Database error, nothing was inserted
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let restaurant_repo = RestaurantRepository::new(&txn);
        let pizza_repo = PizzaRepository::new(&txn);
        let offering_repo = RestaurantPizzaRepository::new(&txn);

        if !restaurant_repo.get_all().await?.is_empty() || !pizza_repo.get_all().await?.is_empty()
        {
            return Ok(false);
        }

        let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
        for (name, address) in RESTAURANTS {
            let restaurant = restaurant_repo
                .create(CreateRestaurantParams {
                    name: name.to_string(),
                    address: address.to_string(),
                })
                .await?;
            restaurants.push(restaurant);
        }

        let mut pizzas = Vec::with_capacity(PIZZAS.len());
        for (name, ingredients) in PIZZAS {
            let pizza = pizza_repo
                .create(CreatePizzaParams {
                    name: name.to_string(),
                    ingredients: ingredients.to_string(),
                })
                .await?;
            pizzas.push(pizza);
        }

        for (restaurant, pizza, price) in OFFERINGS {
            offering_repo
                .create(price, restaurants[restaurant].id, pizzas[pizza].id)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Seeded {} restaurants, {} pizzas and {} offerings",
            RESTAURANTS.len(),
            PIZZAS.len(),
            OFFERINGS.len()
        );

        Ok(true)
    }
}
