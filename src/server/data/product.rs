//! Product data repository for database operations.
//!
//! Products are always returned with their category set, loaded through an explicit
//! query over the `product_category` join table rather than lazily per product.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter,
};

use crate::server::{
    data::{apply_sort, SortColumn},
    model::{
        page::{Page, PageRequest},
        product::{Product, ProductParams, ProductSortField},
    },
};

impl SortColumn<entity::product::Entity> for ProductSortField {
    fn column(&self) -> entity::product::Column {
        match self {
            Self::Id => entity::product::Column::Id,
            Self::Name => entity::product::Column::Name,
            Self::Price => entity::product::Column::Price,
            Self::Date => entity::product::Column::Date,
        }
    }
}

/// Repository providing database operations for products and their category links.
pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ProductRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets one page of products with their categories.
    ///
    /// Applies the requested sort keys followed by id ascending, so equal sort values
    /// keep insertion order. A page index past the end yields empty content with the
    /// totals still populated.
    ///
    /// # Arguments
    /// - `request` - Page index, page size and sort keys
    ///
    /// # Returns
    /// - `Ok(Page<Product>)` - Products for the requested page and total product count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        request: &PageRequest<ProductSortField>,
    ) -> Result<Page<Product>, DbErr> {
        let select = apply_sort(
            entity::prelude::Product::find(),
            &request.sort,
            entity::product::Column::Id,
        );
        let paginator = select.paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        if request.offset().is_none() {
            return Ok(Page::new(Vec::new(), total, request));
        }
        let products = paginator.fetch_page(request.page).await?;

        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let mut categories = self.get_categories(&ids).await?;

        let content = products
            .into_iter()
            .map(|product| {
                let linked = categories.remove(&product.id).unwrap_or_default();
                Product::from_entity(product, linked)
            })
            .collect();

        Ok(Page::new(content, total, request))
    }

    /// Gets a product by ID with its categories.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Product found
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let categories = product
            .find_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        Ok(Some(Product::from_entity(product, categories)))
    }

    /// Gets the product row for a write, failing when it does not exist.
    ///
    /// # Returns
    /// - `Ok(product::Model)` - Existing product row
    /// - `Err(DbErr::RecordNotFound)` - No product with that ID
    pub async fn get_reference(&self, id: i32) -> Result<entity::product::Model, DbErr> {
        entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Id not found {}", id)))
    }

    /// Loads the categories of several products in one query.
    ///
    /// # Arguments
    /// - `product_ids` - Products to load categories for
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Categories keyed by product ID; products without categories are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_categories(
        &self,
        product_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::category::Model>>, DbErr> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ProductCategory::find()
            .filter(entity::product_category::Column::ProductId.is_in(product_ids.iter().copied()))
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<entity::category::Model>> = HashMap::new();
        for (link, category) in rows {
            if let Some(category) = category {
                map.entry(link.product_id).or_default().push(category);
            }
        }

        Ok(map)
    }

    /// Creates a new product with its category links and returns it.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with its assigned ID
    /// - `Err(DbErr::RecordNotFound)` - One of the category IDs does not exist
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: ProductParams) -> Result<Product, DbErr> {
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            img_url: ActiveValue::Set(params.img_url),
            date: ActiveValue::Set(params.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let categories = self.set_categories(product.id, &params.category_ids).await?;

        Ok(Product::from_entity(product, categories))
    }

    /// Copies every scalar field onto an existing product and replaces its categories.
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(DbErr::RecordNotFound)` - Product or one of the category IDs does not exist
    /// - `Err(DbErr::RecordNotUpdated)` - Product was removed before the update ran
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: ProductParams) -> Result<Product, DbErr> {
        let mut product: entity::product::ActiveModel = self.get_reference(id).await?.into();

        product.name = ActiveValue::Set(params.name);
        product.description = ActiveValue::Set(params.description);
        product.price = ActiveValue::Set(params.price);
        product.img_url = ActiveValue::Set(params.img_url);
        product.date = ActiveValue::Set(params.date);

        let product = product.update(self.db).await?;
        let categories = self.set_categories(product.id, &params.category_ids).await?;

        Ok(Product::from_entity(product, categories))
    }

    /// Replaces the category set of a product.
    ///
    /// Every ID must reference an existing category; the existing links are removed
    /// only after that check succeeds.
    ///
    /// # Returns
    /// - `Ok(Vec<category::Model>)` - Categories now linked to the product
    /// - `Err(DbErr::RecordNotFound)` - One of the category IDs does not exist
    pub async fn set_categories(
        &self,
        product_id: i32,
        category_ids: &[i32],
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        let categories = if category_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids.iter().copied()))
                .all(self.db)
                .await?
        };

        if let Some(missing) = category_ids
            .iter()
            .find(|id| !categories.iter().any(|c| c.id == **id))
        {
            return Err(DbErr::RecordNotFound(format!("Category not found {}", missing)));
        }

        entity::prelude::ProductCategory::delete_many()
            .filter(entity::product_category::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        for category in &categories {
            entity::product_category::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                category_id: ActiveValue::Set(category.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(categories)
    }

    /// Deletes a product by ID; its category links are removed with it.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the product did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
