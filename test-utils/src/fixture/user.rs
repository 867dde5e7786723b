//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test user name.
pub const DEFAULT_NAME: &str = "Alex Brown";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "alex@gmail.com";

/// Bcrypt hash used as the stored password of fixture users.
///
/// Hashes are never verified in tests, so any well-formed value works.
pub const DEFAULT_PASSWORD_HASH: &str =
    "$2a$10$eACCYoNOHEqXve8aIWT8Nu3PkMXWBaOxJ9aORUYzfMQCbVBIhZ8tG";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Alex Brown"`
/// - email: `"alex@gmail.com"`
/// - password: `DEFAULT_PASSWORD_HASH`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    name: String,
    email: String,
    password: String,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD_HASH.to_string(),
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the user name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the user email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
