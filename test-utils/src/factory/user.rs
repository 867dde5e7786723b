//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern and can attach roles.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("maria@gmail.com")
///     .role(role.id)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
    role_ids: Vec<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {n}"`
    /// - email: `"user{n}@example.com"`
    /// - password: fixture bcrypt hash
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::user::entity_builder()
            .name(format!("User {}", id))
            .email(format!("user{}@example.com", id))
            .build();

        Self {
            db,
            entity,
            role_ids: Vec::new(),
        }
    }

    /// Sets the name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    /// Attaches an existing role to the user.
    pub fn role(mut self, role_id: i32) -> Self {
        self.role_ids.push(role_id);
        self
    }

    /// Builds and inserts the user entity and its role links.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            email: ActiveValue::Set(self.entity.email),
            password: ActiveValue::Set(self.entity.password),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for role_id in self.role_ids {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                role_id: ActiveValue::Set(role_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a user with default values and no roles.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.email, user2.email);
        assert_ne!(user1.id, user2.id);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        UserFactory::new(db).email("dup@example.com").build().await?;
        let result = UserFactory::new(db).email("dup@example.com").build().await;

        assert!(result.is_err());

        Ok(())
    }
}
