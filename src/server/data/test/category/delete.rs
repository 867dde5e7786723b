use sea_orm::SqlErr;

use super::*;

/// Tests deleting an unreferenced category.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_unreferenced_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert_eq!(repo.delete(category.id).await?, 1);
    assert_eq!(entity::prelude::Category::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a category still linked to a product.
///
/// Expected: Err with a foreign key violation and the row kept
#[tokio::test]
async fn referenced_category_violates_foreign_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, _) = factory::helpers::create_product_with_category(db).await?;

    let repo = CategoryRepository::new(db);
    let result = repo.delete(category.id).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}
