use super::*;

/// Tests deleting a restaurant.
///
/// Expected: Ok(true) with restaurant deleted
#[tokio::test]
async fn deletes_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let deleted = RestaurantRepository::new(db).delete(restaurant.id).await?;

    assert!(deleted);
    let check = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a restaurant removes its offerings but not its pizzas.
///
/// Expected: Ok(true) with offerings deleted and pizzas retained
#[tokio::test]
async fn removes_offerings_and_keeps_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, _offering) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;
    let other = factory::create_restaurant(db).await?;
    factory::create_restaurant_pizza(db, other.id, pizza.id).await?;

    let deleted = RestaurantRepository::new(db).delete(restaurant.id).await?;
    assert!(deleted);

    let remaining = entity::prelude::RestaurantPizza::find()
        .filter(entity::restaurant_pizza::Column::RestaurantId.eq(restaurant.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let other_offerings = entity::prelude::RestaurantPizza::find()
        .filter(entity::restaurant_pizza::Column::RestaurantId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(other_offerings, 1);

    let pizza_check = entity::prelude::Pizza::find_by_id(pizza.id).one(db).await?;
    assert!(pizza_check.is_some());

    Ok(())
}

/// Tests that a rolled back delete leaves the restaurant and its offerings intact.
///
/// Expected: restaurant and offering still present after rollback
#[tokio::test]
async fn rolls_back_with_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, _pizza, offering) =
        factory::helpers::create_restaurant_pizza_with_dependencies(db).await?;

    let txn = db.begin().await?;
    let deleted = RestaurantRepository::new(&txn).delete(restaurant.id).await?;
    assert!(deleted);
    txn.rollback().await?;

    let restaurant_check = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?;
    assert!(restaurant_check.is_some());
    let offering_check = entity::prelude::RestaurantPizza::find_by_id(offering.id)
        .one(db)
        .await?;
    assert!(offering_check.is_some());

    Ok(())
}

/// Tests deleting a restaurant that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = RestaurantRepository::new(db).delete(999999).await?;

    assert!(!deleted);

    Ok(())
}
