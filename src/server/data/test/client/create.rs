use super::*;

/// Tests creating a client.
///
/// Expected: Ok with an assigned id and all fields stored
#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let created = repo.create(params()).await?;

    let found = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(found.name, "Jorge Amado");
    assert_eq!(found.cpf, "98765432100");
    assert_eq!(found.income, 2500.0);
    assert_eq!(found.birth_date, NaiveDate::from_ymd_opt(1970, 8, 10).unwrap());

    Ok(())
}
