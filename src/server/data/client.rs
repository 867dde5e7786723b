//! Client data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
};

use crate::server::{
    data::{apply_sort, SortColumn},
    model::{
        client::{Client, ClientParams, ClientSortField},
        page::{Page, PageRequest},
    },
};

impl SortColumn<entity::client::Entity> for ClientSortField {
    fn column(&self) -> entity::client::Column {
        match self {
            Self::Id => entity::client::Column::Id,
            Self::Name => entity::client::Column::Name,
            Self::Cpf => entity::client::Column::Cpf,
            Self::Income => entity::client::Column::Income,
            Self::BirthDate => entity::client::Column::BirthDate,
        }
    }
}

/// Repository providing database operations for clients.
pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    /// Creates a new ClientRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ClientRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets one page of clients.
    ///
    /// # Arguments
    /// - `request` - Page index, page size and sort keys
    ///
    /// # Returns
    /// - `Ok(Page<Client>)` - Clients for the requested page and total client count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        request: &PageRequest<ClientSortField>,
    ) -> Result<Page<Client>, DbErr> {
        let paginator = apply_sort(
            entity::prelude::Client::find(),
            &request.sort,
            entity::client::Column::Id,
        )
        .paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        if request.offset().is_none() {
            return Ok(Page::new(Vec::new(), total, request));
        }
        let entities = paginator.fetch_page(request.page).await?;
        let clients = entities.into_iter().map(Client::from_entity).collect();

        Ok(Page::new(clients, total, request))
    }

    /// Gets a client by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Client found
    /// - `Ok(None)` - No client with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Creates a new client.
    ///
    /// # Returns
    /// - `Ok(Client)` - The created client with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: ClientParams) -> Result<Client, DbErr> {
        let entity = entity::client::ActiveModel {
            name: ActiveValue::Set(params.name),
            cpf: ActiveValue::Set(params.cpf),
            income: ActiveValue::Set(params.income),
            birth_date: ActiveValue::Set(params.birth_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    /// Copies every field of `params` onto an existing client.
    ///
    /// # Returns
    /// - `Ok(Client)` - The updated client
    /// - `Err(DbErr::RecordNotFound)` - No client with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: ClientParams) -> Result<Client, DbErr> {
        let mut client: entity::client::ActiveModel = entity::prelude::Client::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Id not found {}", id)))?
            .into();

        client.name = ActiveValue::Set(params.name);
        client.cpf = ActiveValue::Set(params.cpf);
        client.income = ActiveValue::Set(params.income);
        client.birth_date = ActiveValue::Set(params.birth_date);

        let entity = client.update(self.db).await?;

        Ok(Client::from_entity(entity))
    }

    /// Deletes a client by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the client did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
