use super::*;

/// Tests creating a user with a role.
///
/// Expected: Ok with the role linked and the hash stored
#[tokio::test]
async fn creates_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;

    let repo = UserRepository::new(db);
    let created = repo
        .create(params("bob@gmail.com", vec![role.id]), "hash".to_string())
        .await?;

    assert_eq!(created.email, "bob@gmail.com");
    assert_eq!(created.roles[0].id, role.id);
    assert_eq!(
        stored_hash(db, created.id).await?.as_deref(),
        Some("hash")
    );

    Ok(())
}

/// Tests creating a user with an email that is already taken.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn duplicate_email_violates_unique_constraint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("bob@gmail.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let err = repo
        .create(params("bob@gmail.com", Vec::new()), "hash".to_string())
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a user with an unknown role.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(params("bob@gmail.com", vec![77]), "hash".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
