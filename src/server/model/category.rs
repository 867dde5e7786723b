//! Category domain models and parameters.

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: Some(self.id),
            name: self.name,
        }
    }
}

/// Writable fields of a category for create and update operations.
#[derive(Debug, Clone)]
pub struct CategoryParams {
    pub name: String,
}

impl CategoryParams {
    pub fn from_dto(dto: CategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}
