use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::RoleDto;

/// Public projection of a user; never carries the password.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleDto>,
}

/// Body accepted when creating a user: the public fields plus the write-only password.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct UserInsertDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub password: String,
}
