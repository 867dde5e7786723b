use super::*;

/// Tests creating a category.
///
/// Expected: Ok with an assigned id and the row stored
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo.create(params("Books")).await?;

    let found = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(found.name, "Books");
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}
