use super::*;

/// Tests creating a restaurant.
///
/// Verifies that the repository inserts the restaurant and assigns an ID.
///
/// Expected: Ok with restaurant persisted
#[tokio::test]
async fn creates_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let restaurant = repo
        .create(CreateRestaurantParams {
            name: "Karen's Pizza Shack".to_string(),
            address: "address1".to_string(),
        })
        .await?;

    assert!(restaurant.id > 0);
    assert_eq!(restaurant.name, "Karen's Pizza Shack");
    assert_eq!(restaurant.address, "address1");

    let stored = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Karen's Pizza Shack");

    Ok(())
}
