use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct CategoryDto {
    /// Assigned by the store; ignored on create and update.
    #[serde(default)]
    pub id: Option<i32>,
    /// Optional when the category is only referenced by id from another resource.
    #[serde(default)]
    pub name: String,
}
