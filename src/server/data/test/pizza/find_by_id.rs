use super::*;

/// Tests finding an existing pizza.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pizza::PizzaFactory::new(db)
        .name("Geri")
        .ingredients("Dough, Tomato Sauce, Cheese, Pepperoni")
        .build()
        .await?;

    let pizza = PizzaRepository::new(db)
        .find_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(pizza.id, created.id);
    assert_eq!(pizza.name, "Geri");
    assert_eq!(pizza.ingredients, "Dough, Tomato Sauce, Cheese, Pepperoni");

    Ok(())
}

/// Tests finding a pizza that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pizzeria_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = PizzaRepository::new(db).find_by_id(999999).await?;

    assert!(pizza.is_none());

    Ok(())
}
