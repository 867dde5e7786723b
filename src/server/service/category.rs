use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CategoryParams},
    service::{not_found, translate_db_err},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category, unpaged
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Creates a new category
    pub async fn create(&self, params: CategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let category = repo.create(params).await.map_err(translate_db_err)?;

        tracing::info!("Created category {}", category.id);

        Ok(category)
    }

    /// Renames a category
    pub async fn update(&self, id: i32, params: CategoryParams) -> Result<Category, AppError> {
        let txn = self.db.begin().await?;

        let category = CategoryRepository::new(&txn)
            .update(id, params)
            .await
            .map_err(translate_db_err)?;

        txn.commit().await?;

        Ok(category)
    }

    /// Deletes a category
    ///
    /// Fails with `DatabaseIntegrity` while a product still references it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        let deleted = repo.delete(id).await.map_err(translate_db_err)?;
        if deleted == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted category {}", id);

        Ok(())
    }
}
