use crate::server::{
    config::Config,
    error::{validation::ValidationError, AppError},
    model::restaurant_pizza::CreateRestaurantPizzaParams,
    service::{
        pizza::PizzaService, restaurant::RestaurantService,
        restaurant_pizza::RestaurantPizzaService, seed::SeedService,
    },
    startup::{connect_to_database, seed_database},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
