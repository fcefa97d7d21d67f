//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`. Each repository borrows any `ConnectionTrait` implementor, so the
//! caller decides whether it runs on the pool or inside a transaction.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
