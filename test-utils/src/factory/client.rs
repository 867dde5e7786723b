//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::client::Model,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with fixture defaults and a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::client::entity_builder()
            .name(format!("Client {}", next_id()))
            .build();

        Self { db, entity }
    }

    /// Sets the client name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the client income.
    pub fn income(mut self, income: f64) -> Self {
        self.entity.income = income;
        self
    }

    /// Builds and inserts the client entity into the database.
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            cpf: ActiveValue::Set(self.entity.cpf),
            income: ActiveValue::Set(self.entity.income),
            birth_date: ActiveValue::Set(self.entity.birth_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
