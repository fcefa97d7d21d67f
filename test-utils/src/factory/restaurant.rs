//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let restaurant = RestaurantFactory::new(&db)
///     .name("Karen's Pizza Shack")
///     .address("address1")
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {id}"`
    /// - address: `"{id} Test Street"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Restaurant {}", id),
            address: format!("{} Test Street", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values.
///
/// Shorthand for `RestaurantFactory::new(db).build().await`.
pub async fn create_restaurant(
    db: &DatabaseConnection,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}
