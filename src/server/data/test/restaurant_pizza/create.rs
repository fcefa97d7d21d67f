use super::*;

/// Tests creating an offering.
///
/// Expected: Ok with offering persisted and ID assigned
#[tokio::test]
async fn creates_offering() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let pizza = factory::create_pizza(db).await?;

    let offering = RestaurantPizzaRepository::new(db)
        .create(5, restaurant.id, pizza.id)
        .await?;

    assert!(offering.id > 0);
    assert_eq!(offering.price, 5);
    assert_eq!(offering.restaurant_id, restaurant.id);
    assert_eq!(offering.pizza_id, pizza.id);

    let stored = entity::prelude::RestaurantPizza::find_by_id(offering.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.price, 5);

    Ok(())
}

/// Tests that the schema rejects prices outside 1 to 30.
///
/// Expected: Err for 0 and 31, nothing persisted
#[tokio::test]
async fn rejects_price_outside_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let pizza = factory::create_pizza(db).await?;
    let repo = RestaurantPizzaRepository::new(db);

    assert!(repo.create(0, restaurant.id, pizza.id).await.is_err());
    assert!(repo.create(31, restaurant.id, pizza.id).await.is_err());

    let count = entity::prelude::RestaurantPizza::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that the schema rejects a dangling restaurant reference.
///
/// Expected: Err with nothing persisted
#[tokio::test]
async fn rejects_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::create_pizza(db).await?;

    let result = RestaurantPizzaRepository::new(db)
        .create(5, 999999, pizza.id)
        .await;

    assert!(result.is_err());

    Ok(())
}
