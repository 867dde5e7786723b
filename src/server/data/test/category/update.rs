use super::*;

/// Tests renaming an existing category.
///
/// Expected: Ok with the same id and the new name
#[tokio::test]
async fn renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo.update(category.id, params("Games")).await?;

    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Games");
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}

/// Tests renaming a category that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.update(1000, params("Games")).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
