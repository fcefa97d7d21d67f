use super::*;

/// Tests listing pizzas in ID order.
///
/// Expected: Ok with every pizza, ordered by ID
#[tokio::test]
async fn returns_pizzas_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_pizza(db).await?;
    let second = factory::create_pizza(db).await?;

    let pizzas = PizzaRepository::new(db).get_all().await?;

    let ids: Vec<i32> = pizzas.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that deleting a pizza cascades to its offerings at the schema level.
///
/// Expected: offering removed along with the pizza, restaurant retained
#[tokio::test]
async fn deleting_pizza_cascades_to_offerings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, _offering) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    pizza.delete(db).await?;

    let offerings = entity::prelude::RestaurantPizza::find().count(db).await?;
    assert_eq!(offerings, 0);

    let restaurant_check = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?;
    assert!(restaurant_check.is_some());

    Ok(())
}
