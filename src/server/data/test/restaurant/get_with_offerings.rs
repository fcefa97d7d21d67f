use super::*;

/// Tests fetching a restaurant with its offerings.
///
/// Verifies that each offering is returned with its pizza, ordered by offering ID,
/// and that offerings of other restaurants are excluded.
///
/// Expected: Ok(Some) with two offerings
#[tokio::test]
async fn returns_offerings_with_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let other = factory::create_restaurant(db).await?;
    let emma = factory::pizza::PizzaFactory::new(db).name("Emma").build().await?;
    let geri = factory::pizza::PizzaFactory::new(db).name("Geri").build().await?;

    let first = factory::restaurant_pizza::RestaurantPizzaFactory::new(db, restaurant.id, geri.id)
        .price(12)
        .build()
        .await?;
    let second = factory::restaurant_pizza::RestaurantPizzaFactory::new(db, restaurant.id, emma.id)
        .price(7)
        .build()
        .await?;
    factory::create_restaurant_pizza(db, other.id, emma.id).await?;

    let result = RestaurantRepository::new(db)
        .get_with_offerings(restaurant.id)
        .await?
        .unwrap();

    assert_eq!(result.restaurant.id, restaurant.id);
    assert_eq!(result.offerings.len(), 2);
    assert_eq!(result.offerings[0].offering.id, first.id);
    assert_eq!(result.offerings[0].offering.price, 12);
    assert_eq!(result.offerings[0].pizza.name, "Geri");
    assert_eq!(result.offerings[1].offering.id, second.id);
    assert_eq!(result.offerings[1].pizza.name, "Emma");

    Ok(())
}

/// Tests fetching a restaurant without offerings.
///
/// Expected: Ok(Some) with empty offerings
#[tokio::test]
async fn returns_empty_offerings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let result = RestaurantRepository::new(db)
        .get_with_offerings(restaurant.id)
        .await?
        .unwrap();

    assert!(result.offerings.is_empty());

    Ok(())
}

/// Tests fetching a restaurant that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RestaurantRepository::new(db)
        .get_with_offerings(999999)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests a restaurant offering the same pizza twice.
///
/// Expected: Ok(Some) with both offerings carrying the same pizza
#[tokio::test]
async fn repeats_pizza_for_duplicate_offerings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, _offering) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    factory::create_restaurant_pizza(db, restaurant.id, pizza.id).await?;

    let result = RestaurantRepository::new(db)
        .get_with_offerings(restaurant.id)
        .await?
        .unwrap();

    assert_eq!(result.offerings.len(), 2);
    assert!(result.offerings.iter().all(|o| o.pizza.id == pizza.id));

    Ok(())
}
