use super::*;

/// Tests listing users sorted by email with their roles.
///
/// Expected: Ok with users ordered by email and roles attached
#[tokio::test]
async fn sorts_by_email_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;
    factory::user::UserFactory::new(db)
        .email("zoe@gmail.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("ana@gmail.com")
        .role(role.id)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let request = PageRequest::new(
        0,
        10,
        vec![SortOrder {
            field: UserSortField::Email,
            direction: SortDirection::Asc,
        }],
    );
    let page = repo.get_paginated(&request).await?;

    assert_eq!(page.content[0].email, "ana@gmail.com");
    assert_eq!(page.content[0].roles.len(), 1);
    assert_eq!(page.content[0].roles[0].authority, role.authority);
    assert!(page.content[1].roles.is_empty());

    Ok(())
}
