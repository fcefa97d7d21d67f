use super::*;

/// Tests listing restaurants in ID order.
///
/// Expected: Ok with every restaurant, ordered by ID
#[tokio::test]
async fn returns_restaurants_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_restaurant(db).await?;
    let second = factory::create_restaurant(db).await?;
    let third = factory::create_restaurant(db).await?;

    let restaurants = RestaurantRepository::new(db).get_all().await?;

    let ids: Vec<i32> = restaurants.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing restaurants on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_restaurants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurants = RestaurantRepository::new(db).get_all().await?;

    assert!(restaurants.is_empty());

    Ok(())
}
