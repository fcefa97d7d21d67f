use crate::server::data::restaurant_pizza::RestaurantPizzaRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
