use super::*;

/// Tests finding an existing product.
///
/// Expected: Ok(Some) with the product and its category
#[tokio::test]
async fn finds_product_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_category(db).await?;

    let repo = ProductRepository::new(db);
    let found = repo.get_by_id(product.id).await?.unwrap();

    assert_eq!(found.id, product.id);
    assert_eq!(found.name, product.name);
    assert_eq!(found.categories.len(), 1);
    assert_eq!(found.categories[0].id, category.id);

    Ok(())
}

/// Tests finding a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert!(repo.get_by_id(1000).await?.is_none());

    Ok(())
}

/// Tests that the write reference fails for a missing product.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn reference_to_missing_id_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo.get_reference(1000).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
