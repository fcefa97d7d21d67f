//! HTTP request handlers.
//!
//! Each handler extracts its inputs, calls the matching service and converts the
//! returned domain model into a DTO. Errors are returned as `AppError` and rendered
//! by its `IntoResponse` implementation.

pub mod index;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
