//! SeaORM entities for the pizzeria schema.

pub mod prelude;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
