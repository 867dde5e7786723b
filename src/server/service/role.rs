use sea_orm::DatabaseConnection;

use crate::server::{
    data::role::RoleRepository, error::AppError, model::role::Role, service::not_found,
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, AppError> {
        Ok(RoleRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Role, AppError> {
        RoleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}
