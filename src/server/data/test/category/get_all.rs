use super::*;

/// Tests listing every category.
///
/// Expected: Ok with all categories in id order
#[tokio::test]
async fn lists_categories_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let books = factory::category::CategoryFactory::new(db).name("Books").build().await?;
    let electronics = factory::category::CategoryFactory::new(db)
        .name("Electronics")
        .build()
        .await?;
    let computers = factory::category::CategoryFactory::new(db)
        .name("Computers")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![books.id, electronics.id, computers.id]);

    Ok(())
}

/// Tests listing categories on an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_table_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_all().await?.is_empty());
    assert!(repo.get_by_id(1).await?.is_none());

    Ok(())
}
