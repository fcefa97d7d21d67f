use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        pizza::PizzaRepository, restaurant::RestaurantRepository,
        restaurant_pizza::RestaurantPizzaRepository,
    },
    error::{validation::ValidationError, AppError},
    model::restaurant_pizza::{CreateRestaurantPizzaParams, RestaurantPizzaWithParents},
};

pub struct RestaurantPizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantPizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an offering of a pizza at a restaurant
    ///
    /// The insert is the first statement of the transaction so the write lock is taken
    /// before anything is read. A foreign key violation means the restaurant or pizza
    /// is missing; the parents are then looked up to report which one.
    ///
    /// # Returns
    /// - `Ok(RestaurantPizzaWithParents)` - The created offering with its restaurant and pizza
    /// - `Err(AppError::ValidationErr)` - The restaurant or pizza does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        params: CreateRestaurantPizzaParams,
    ) -> Result<RestaurantPizzaWithParents, AppError> {
        let txn = self.db.begin().await?;

        let restaurant_id = i32::try_from(params.restaurant_id).ok();
        let pizza_id = i32::try_from(params.pizza_id).ok();

        let offering = match (restaurant_id, pizza_id) {
            (Some(restaurant_id), Some(pizza_id)) => {
                match RestaurantPizzaRepository::new(&txn)
                    .create(params.price, restaurant_id, pizza_id)
                    .await
                {
                    Ok(offering) => Some(offering),
                    Err(err) if is_foreign_key_violation(&err) => None,
                    Err(err) => return Err(err.into()),
                }
            }
            _ => None,
        };

        let restaurant = match restaurant_id {
            Some(id) => RestaurantRepository::new(&txn).find_by_id(id).await?,
            None => None,
        }
        .ok_or(ValidationError::UnknownRestaurant(params.restaurant_id))?;

        let pizza = match pizza_id {
            Some(id) => PizzaRepository::new(&txn).find_by_id(id).await?,
            None => None,
        }
        .ok_or(ValidationError::UnknownPizza(params.pizza_id))?;

        let offering = offering.ok_or_else(|| {
            DbErr::Custom(format!(
                "Offering of pizza {} at restaurant {} violated a foreign key",
                pizza.id, restaurant.id
            ))
        })?;

        txn.commit().await?;

        tracing::info!(
            "Restaurant {} now offers pizza {} at {}",
            restaurant.id,
            pizza.id,
            offering.price
        );

        Ok(RestaurantPizzaWithParents {
            offering,
            restaurant,
            pizza,
        })
    }
}

fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
