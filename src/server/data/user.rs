//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their role
//! links. The password column is written only on insert and never read back into the
//! domain model.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter,
};

use crate::server::{
    data::{apply_sort, SortColumn},
    model::{
        page::{Page, PageRequest},
        user::{User, UserParams, UserSortField},
    },
};

impl SortColumn<entity::user::Entity> for UserSortField {
    fn column(&self) -> entity::user::Column {
        match self {
            Self::Id => entity::user::Column::Id,
            Self::Name => entity::user::Column::Name,
            Self::Email => entity::user::Column::Email,
        }
    }
}

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets one page of users with their roles.
    ///
    /// # Arguments
    /// - `request` - Page index, page size and sort keys
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        request: &PageRequest<UserSortField>,
    ) -> Result<Page<User>, DbErr> {
        let paginator = apply_sort(
            entity::prelude::User::find(),
            &request.sort,
            entity::user::Column::Id,
        )
        .paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        if request.offset().is_none() {
            return Ok(Page::new(Vec::new(), total, request));
        }
        let entities = paginator.fetch_page(request.page).await?;

        let ids: Vec<i32> = entities.iter().map(|u| u.id).collect();
        let mut roles = self.get_roles(&ids).await?;

        let users = entities
            .into_iter()
            .map(|user| {
                let linked = roles.remove(&user.id).unwrap_or_default();
                User::from_entity(user, linked)
            })
            .collect();

        Ok(Page::new(users, total, request))
    }

    /// Gets a user by ID with roles.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let roles = user.find_related(entity::prelude::Role).all(self.db).await?;

        Ok(Some(User::from_entity(user, roles)))
    }

    /// Loads the roles of several users in one query.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Roles keyed by user ID; users without roles are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_roles(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::role::Model>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.is_in(user_ids.iter().copied()))
            .find_also_related(entity::prelude::Role)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<entity::role::Model>> = HashMap::new();
        for (link, role) in rows {
            if let Some(role) = role {
                map.entry(link.user_id).or_default().push(role);
            }
        }

        Ok(map)
    }

    /// Creates a new user with role links.
    ///
    /// # Arguments
    /// - `params` - Public user fields and role IDs
    /// - `password_hash` - Bcrypt hash of the user's password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr::RecordNotFound)` - One of the role IDs does not exist
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: UserParams, password_hash: String) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let roles = self.set_roles(user.id, &params.role_ids).await?;

        Ok(User::from_entity(user, roles))
    }

    /// Updates name and email of an existing user and replaces its roles.
    ///
    /// The stored password hash is left unchanged.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - User or one of the role IDs does not exist
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn update(&self, id: i32, params: UserParams) -> Result<User, DbErr> {
        let mut user: entity::user::ActiveModel = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Id not found {}", id)))?
            .into();

        user.name = ActiveValue::Set(params.name);
        user.email = ActiveValue::Set(params.email);

        let user = user.update(self.db).await?;
        let roles = self.set_roles(user.id, &params.role_ids).await?;

        Ok(User::from_entity(user, roles))
    }

    /// Replaces the role set of a user.
    ///
    /// # Returns
    /// - `Ok(Vec<role::Model>)` - Roles now linked to the user
    /// - `Err(DbErr::RecordNotFound)` - One of the role IDs does not exist
    pub async fn set_roles(
        &self,
        user_id: i32,
        role_ids: &[i32],
    ) -> Result<Vec<entity::role::Model>, DbErr> {
        let roles = if role_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Role::find()
                .filter(entity::role::Column::Id.is_in(role_ids.iter().copied()))
                .all(self.db)
                .await?
        };

        if let Some(missing) = role_ids
            .iter()
            .find(|id| !roles.iter().any(|r| r.id == **id))
        {
            return Err(DbErr::RecordNotFound(format!("Role not found {}", missing)));
        }

        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        for role in &roles {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role_id: ActiveValue::Set(role.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(roles)
    }

    /// Deletes a user by ID; its role links are removed with it.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the user did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
