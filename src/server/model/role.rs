use crate::model::role::RoleDto;

/// Authority granted to users, e.g. `ROLE_ADMIN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub authority: String,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            authority: entity.authority,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: Some(self.id),
            authority: self.authority,
        }
    }
}
