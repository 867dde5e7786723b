use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::category::{Category, CategoryParams};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every category ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Creates a new category
    pub async fn create(&self, params: CategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Renames an existing category, returning `DbErr::RecordNotFound` when the ID is unknown
    pub async fn update(&self, id: i32, params: CategoryParams) -> Result<Category, DbErr> {
        let mut category: entity::category::ActiveModel = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Id not found {}", id)))?
            .into();

        category.name = ActiveValue::Set(params.name);

        let entity = category.update(self.db).await?;

        Ok(Category::from_entity(entity))
    }

    /// Deletes a category, returning the number of rows removed
    ///
    /// Fails with a foreign key violation while a product still references the category.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
