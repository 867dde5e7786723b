use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct RoleDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub authority: String,
}
