use crate::server::{data::pizza::PizzaRepository, model::pizza::CreatePizzaParams};
use sea_orm::{DbErr, EntityTrait, ModelTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
