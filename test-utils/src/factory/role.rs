//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role with a unique authority (`"ROLE_TEST_{n}"`).
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    create_role_with_authority(db, format!("ROLE_TEST_{}", next_id())).await
}

/// Creates a role with the given authority.
///
/// # Arguments
/// - `db` - Database connection
/// - `authority` - Authority name, must be unique
pub async fn create_role_with_authority(
    db: &DatabaseConnection,
    authority: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        authority: ActiveValue::Set(authority.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
