//! Business logic between controllers and repositories.
//!
//! Services own transaction boundaries: every mutation runs inside a single
//! database transaction that is committed only once all of its steps succeed.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod seed;

#[cfg(test)]
mod test;
