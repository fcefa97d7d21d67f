use super::*;

/// Tests the pizzas reachable through a restaurant's offerings.
///
/// A pizza offered twice is listed once; pizzas only offered elsewhere are excluded.
///
/// Expected: Ok with distinct pizzas ordered by ID
#[tokio::test]
async fn returns_distinct_offered_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let other = factory::create_restaurant(db).await?;
    let first = factory::create_pizza(db).await?;
    let second = factory::create_pizza(db).await?;
    let elsewhere = factory::create_pizza(db).await?;

    factory::create_restaurant_pizza(db, restaurant.id, second.id).await?;
    factory::create_restaurant_pizza(db, restaurant.id, first.id).await?;
    factory::create_restaurant_pizza(db, restaurant.id, second.id).await?;
    factory::create_restaurant_pizza(db, other.id, elsewhere.id).await?;

    let pizzas = RestaurantRepository::new(db).get_pizzas(restaurant.id).await?;

    let ids: Vec<i32> = pizzas.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
