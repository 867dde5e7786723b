use super::*;

/// Tests deleting a client.
///
/// Expected: Ok(1) then Ok(0) on repeat
#[tokio::test]
async fn deletes_client_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);

    assert_eq!(repo.delete(client.id).await?, 1);
    assert_eq!(repo.delete(client.id).await?, 0);
    assert!(repo.get_by_id(client.id).await?.is_none());

    Ok(())
}
