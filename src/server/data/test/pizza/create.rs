use super::*;

/// Tests creating a pizza.
///
/// Expected: Ok with pizza persisted and ID assigned
#[tokio::test]
async fn creates_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = PizzaRepository::new(db)
        .create(CreatePizzaParams {
            name: "Melanie".to_string(),
            ingredients: "Dough, Sauce, Ricotta, Red peppers, Mustard".to_string(),
        })
        .await?;

    assert!(pizza.id > 0);
    assert_eq!(pizza.name, "Melanie");
    assert_eq!(
        pizza.ingredients,
        "Dough, Sauce, Ricotta, Red peppers, Mustard"
    );

    Ok(())
}
