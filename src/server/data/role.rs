//! Role data repository.
//!
//! Roles are reference data: they are seeded at startup and only read through the API.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::role::Role;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every role ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Role>)` - All roles (empty if none are seeded)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    /// Gets a role by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Role found
    /// - `Ok(None)` - No role with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Role::from_entity))
    }
}
