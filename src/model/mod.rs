//! Data transfer objects returned to and accepted from API clients.
//!
//! Each response shape has its own struct so nesting stays explicit: nested
//! restaurants and pizzas never carry their own offering collections.

pub mod api;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
