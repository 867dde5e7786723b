use super::*;

/// Tests creating a product with categories.
///
/// Expected: Ok with a new id and the category links stored
#[tokio::test]
async fn creates_product_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = ProductRepository::new(db);
    let created = repo.create(params(vec![category.id])).await?;

    assert_eq!(created.name, "PS5");
    assert_eq!(created.price, Decimal::new(60000, 2));
    assert_eq!(created.categories.len(), 1);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 1);

    let links = entity::prelude::ProductCategory::find().count(db).await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests creating a product that references an unknown category.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo.create(params(vec![404])).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
