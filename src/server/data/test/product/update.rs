use super::*;

/// Tests updating an existing product.
///
/// Expected: Ok with every scalar field copied and no new row created
#[tokio::test]
async fn copies_fields_onto_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_category(db).await?;
    let other = factory::category::CategoryFactory::new(db).name("Consoles").build().await?;

    let repo = ProductRepository::new(db);
    let updated = repo.update(product.id, params(vec![other.id])).await?;

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.name, "PS5");
    assert_eq!(updated.description, "The new generation PS5 video game");
    assert_eq!(updated.img_url, "https://img.com/ps5.png");
    assert_eq!(updated.categories.len(), 1);
    assert_eq!(updated.categories[0].id, other.id);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 1);

    let stored = repo.get_by_id(product.id).await?.unwrap();
    assert_eq!(stored.name, "PS5");
    assert_eq!(stored.categories[0].name, "Consoles");

    Ok(())
}

/// Tests that an empty category list clears the product's links.
///
/// Expected: Ok with no categories
#[tokio::test]
async fn empty_categories_clear_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_category(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo.update(product.id, params(Vec::new())).await?;

    assert!(updated.categories.is_empty());
    assert_eq!(entity::prelude::ProductCategory::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no row created
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo.update(1000, params(Vec::new())).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);

    Ok(())
}
