use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{
        page::{Page, PageRequest},
        product::{Product, ProductParams, ProductSortField},
    },
    service::{not_found, translate_db_err},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of products with their categories
    pub async fn get_paginated(
        &self,
        request: PageRequest<ProductSortField>,
    ) -> Result<Page<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_paginated(&request).await?)
    }

    /// Gets a product by ID with its categories, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Creates a product and its category links in one transaction
    pub async fn create(&self, params: ProductParams) -> Result<Product, AppError> {
        let txn = self.db.begin().await?;

        let product = ProductRepository::new(&txn)
            .create(params)
            .await
            .map_err(translate_db_err)?;

        txn.commit().await?;

        tracing::info!("Created product {}", product.id);

        Ok(product)
    }

    /// Updates a product and replaces its categories in one transaction
    ///
    /// The existence check, the row update and the link replacement share the
    /// transaction, so a concurrent delete surfaces as `NotFound`.
    pub async fn update(&self, id: i32, params: ProductParams) -> Result<Product, AppError> {
        let txn = self.db.begin().await?;

        let product = ProductRepository::new(&txn)
            .update(id, params)
            .await
            .map_err(translate_db_err)?;

        txn.commit().await?;

        tracing::debug!("Updated product {}", id);

        Ok(product)
    }

    /// Deletes a product, failing with `NotFound` when no row was removed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        let deleted = repo.delete(id).await.map_err(translate_db_err)?;
        if deleted == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted product {}", id);

        Ok(())
    }
}
