use crate::server::data::role::RoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests listing and finding roles.
///
/// Expected: Ok with roles in id order and None for an unknown id
#[tokio::test]
async fn lists_and_finds_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let operator = factory::role::create_role_with_authority(db, "ROLE_OPERATOR").await?;
    let admin = factory::role::create_role_with_authority(db, "ROLE_ADMIN").await?;

    let repo = RoleRepository::new(db);
    let roles = repo.get_all().await?;

    let authorities: Vec<&str> = roles.iter().map(|r| r.authority.as_str()).collect();
    assert_eq!(authorities, vec!["ROLE_OPERATOR", "ROLE_ADMIN"]);
    assert_eq!(repo.get_by_id(admin.id).await?.unwrap().id, admin.id);
    assert!(repo.get_by_id(operator.id + admin.id + 100).await?.is_none());

    Ok(())
}
