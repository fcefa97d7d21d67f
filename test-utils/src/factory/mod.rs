//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let restaurant = factory::create_restaurant(&db).await?;
//! let pizza = factory::pizza::PizzaFactory::new(&db)
//!     .name("Margherita")
//!     .build()
//!     .await?;
//! let offering = factory::create_restaurant_pizza(&db, restaurant.id, pizza.id).await?;
//! ```

pub mod helpers;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::create_pizza;
pub use restaurant::create_restaurant;
pub use restaurant_pizza::create_restaurant_pizza;
