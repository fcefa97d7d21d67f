use crate::server::{
    data::restaurant::RestaurantRepository, model::restaurant::CreateRestaurantParams,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_pizzas;
mod get_with_offerings;
