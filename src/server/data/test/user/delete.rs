use super::*;

/// Tests deleting a user with roles.
///
/// Expected: Ok(1) with role links removed and roles kept
#[tokio::test]
async fn deletes_user_and_role_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user) = factory::helpers::create_user_with_role(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(user.id).await?, 1);
    assert_eq!(entity::prelude::UserRole::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Role::find().count(db).await?, 1);

    Ok(())
}
