//! User service.
//!
//! Passwords are hashed with bcrypt on a blocking thread before they reach the
//! repository; updates never touch the stored hash.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{internal::InternalError, AppError},
    model::{
        page::{Page, PageRequest},
        user::{CreateUserParams, User, UserParams, UserSortField},
    },
    service::{not_found, translate_db_err},
};

/// Bcrypt work factor for stored password hashes.
const BCRYPT_COST: u32 = 10;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of users with their roles.
    pub async fn get_paginated(
        &self,
        request: PageRequest<UserSortField>,
    ) -> Result<Page<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_paginated(&request).await?)
    }

    /// Gets a user by ID with roles.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Creates a user with a hashed password and role links in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DatabaseIntegrity)` - Email already in use
    /// - `Err(AppError::NotFound)` - One of the role IDs does not exist
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let password_hash = hash_password(params.password).await?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(params.user, password_hash)
            .await
            .map_err(translate_db_err)?;

        txn.commit().await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Updates name, email and roles of a user in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - User or one of the role IDs does not exist
    /// - `Err(AppError::DatabaseIntegrity)` - Email already in use by another user
    pub async fn update(&self, id: i32, params: UserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .update(id, params)
            .await
            .map_err(translate_db_err)?;

        txn.commit().await?;

        tracing::debug!("Updated user {}", id);

        Ok(user)
    }

    /// Deletes a user and its role links.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let deleted = repo.delete(id).await.map_err(translate_db_err)?;
        if deleted == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

/// Hashes a password on the blocking thread pool.
async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(InternalError::from)?
        .map_err(InternalError::from)?;

    Ok(hash)
}
