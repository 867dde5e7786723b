use super::*;

/// Tests deleting an existing product.
///
/// Expected: Ok(1) with the row count reduced by one and its links removed
#[tokio::test]
async fn deletes_product_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_category(db).await?;
    factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let deleted = repo.delete(product.id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ProductCategory::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting the same product twice.
///
/// Expected: Ok(0) on the second call
#[tokio::test]
async fn second_delete_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    repo.delete(product.id).await?;

    assert_eq!(repo.delete(product.id).await?, 0);

    Ok(())
}
