//! User domain models and parameters.
//!
//! The stored password hash never enters these types; it is written by the
//! repository from `CreateUserParams` and otherwise left untouched.

use crate::{
    model::user::{UserDto, UserInsertDto},
    server::model::{page::SortField, role::Role},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Ordered by role id.
    pub roles: Vec<Role>,
}

impl User {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user row; its password hash is dropped
    /// - `roles` - Roles linked to the user through the join table
    pub fn from_entity(entity: entity::user::Model, roles: Vec<entity::role::Model>) -> Self {
        let mut roles: Vec<Role> = roles.into_iter().map(Role::from_entity).collect();
        roles.sort_by_key(|r| r.id);

        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            roles,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: Some(self.id),
            name: self.name,
            email: self.email,
            roles: self.roles.into_iter().map(Role::into_dto).collect(),
        }
    }
}

/// Writable public fields of a user for create and update operations.
#[derive(Debug, Clone)]
pub struct UserParams {
    pub name: String,
    /// Lowercased and trimmed.
    pub email: String,
    pub role_ids: Vec<i32>,
}

impl UserParams {
    pub fn from_dto(dto: UserDto) -> Self {
        let mut role_ids: Vec<i32> = dto.roles.iter().filter_map(|r| r.id).collect();
        role_ids.sort_unstable();
        role_ids.dedup();

        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            role_ids,
        }
    }
}

/// Parameters for creating a user, carrying the plain-text password until the
/// service hashes it.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user: UserParams,
    pub password: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: UserInsertDto) -> Self {
        Self {
            user: UserParams::from_dto(dto.user),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Id,
    Name,
    Email,
}

impl SortField for UserSortField {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    fn property(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    #[test]
    fn projection_never_carries_password() {
        let dto = User::from_entity(fixture::user::entity(), vec![fixture::role::entity()]).into_dto();

        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["roles"][0]["authority"], "ROLE_OPERATOR");
    }

    #[test]
    fn params_normalize_email() {
        let params = UserParams::from_dto(UserDto {
            id: Some(5),
            name: " Alex ".to_string(),
            email: " Alex@Gmail.com ".to_string(),
            roles: Vec::new(),
        });

        assert_eq!(params.name, "Alex");
        assert_eq!(params.email, "alex@gmail.com");
    }
}
