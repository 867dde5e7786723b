use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::client::ClientRepository,
    error::AppError,
    model::{
        client::{Client, ClientParams, ClientSortField},
        page::{Page, PageRequest},
    },
    service::{not_found, translate_db_err},
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest<ClientSortField>,
    ) -> Result<Page<Client>, AppError> {
        let repo = ClientRepository::new(self.db);

        Ok(repo.get_paginated(&request).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Client, AppError> {
        let repo = ClientRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: ClientParams) -> Result<Client, AppError> {
        let repo = ClientRepository::new(self.db);

        let client = repo.create(params).await.map_err(translate_db_err)?;

        tracing::info!("Created client {}", client.id);

        Ok(client)
    }

    pub async fn update(&self, id: i32, params: ClientParams) -> Result<Client, AppError> {
        let txn = self.db.begin().await?;

        let client = ClientRepository::new(&txn)
            .update(id, params)
            .await
            .map_err(translate_db_err)?;

        txn.commit().await?;

        Ok(client)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClientRepository::new(self.db);

        let deleted = repo.delete(id).await.map_err(translate_db_err)?;
        if deleted == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted client {}", id);

        Ok(())
    }
}
