use super::*;

/// Tests updating a user's public fields and roles.
///
/// Expected: Ok with new values, replaced roles and the password hash untouched
#[tokio::test]
async fn updates_fields_and_replaces_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (old_role, user) = factory::helpers::create_user_with_role(db).await?;
    let new_role = factory::create_role(db).await?;

    let repo = UserRepository::new(db);
    let hash_before = stored_hash(db, user.id).await?;
    let updated = repo
        .update(user.id, params("bob@gmail.com", vec![new_role.id]))
        .await?;

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.email, "bob@gmail.com");
    assert_eq!(updated.roles.len(), 1);
    assert_ne!(updated.roles[0].id, old_role.id);
    assert_eq!(stored_hash(db, user.id).await?, hash_before);
    assert_eq!(entity::prelude::UserRole::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(1000, params("bob@gmail.com", Vec::new())).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
