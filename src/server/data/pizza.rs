//! Pizza data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    pizza::{CreatePizzaParams, Pizza},
    restaurant::Restaurant,
};

pub struct PizzaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PizzaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pizza
    pub async fn create(&self, params: CreatePizzaParams) -> Result<Pizza, DbErr> {
        let pizza = entity::pizza::ActiveModel {
            name: ActiveValue::Set(params.name),
            ingredients: ActiveValue::Set(params.ingredients),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pizza::from_entity(pizza))
    }

    /// Finds a pizza by ID
    ///
    /// # Returns
    /// - `Ok(Some(Pizza))` - The pizza if found
    /// - `Ok(None)` - No pizza has this ID
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pizza>, DbErr> {
        let pizza = entity::prelude::Pizza::find_by_id(id).one(self.db).await?;

        Ok(pizza.map(Pizza::from_entity))
    }

    /// Gets all pizzas ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Pizza>, DbErr> {
        let pizzas = entity::prelude::Pizza::find()
            .order_by_asc(entity::pizza::Column::Id)
            .all(self.db)
            .await?;

        Ok(pizzas.into_iter().map(Pizza::from_entity).collect())
    }

    /// Gets the distinct restaurants offering a pizza, ordered by restaurant ID
    pub async fn get_restaurants(&self, pizza_id: i32) -> Result<Vec<Restaurant>, DbErr> {
        let restaurants = entity::prelude::Restaurant::find()
            .join(
                JoinType::InnerJoin,
                entity::restaurant::Relation::RestaurantPizza.def(),
            )
            .filter(entity::restaurant_pizza::Column::PizzaId.eq(pizza_id))
            .distinct()
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await?;

        Ok(restaurants
            .into_iter()
            .map(Restaurant::from_entity)
            .collect())
    }
}
