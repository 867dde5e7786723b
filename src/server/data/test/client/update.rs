use super::*;

/// Tests updating an existing client.
///
/// Expected: Ok with the same id, new values and an unchanged row count
#[tokio::test]
async fn updates_existing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let updated = repo.update(client.id, params()).await?;

    assert_eq!(updated.id, client.id);
    assert_eq!(updated.name, "Jorge Amado");
    assert_eq!(entity::prelude::Client::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating a client that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let result = repo.update(1000, params()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Client::find().count(db).await?, 0);

    Ok(())
}
