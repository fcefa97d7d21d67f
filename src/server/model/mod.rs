//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary,
//! services pass them around, and controllers turn them into DTOs with `into_dto`.
//! Relationships are plain owned values joined explicitly by the repositories; no
//! type holds a back-reference to its parent.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
