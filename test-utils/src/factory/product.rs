//! Product factory for creating test product entities.
//!
//! This module provides factory methods for creating product entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern and can attach categories.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{
    prelude::{DateTimeUtc, Decimal},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr,
};

/// Factory for creating test products with customizable fields.
///
/// Default values are sourced from the product fixture for consistency across tests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db)
///     .name("PC Gamer")
///     .price(Decimal::new(120000, 2))
///     .category(category.id)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::product::Model,
    category_ids: Vec<i32>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values from fixture.
    ///
    /// The name is made unique (`"Product {n}"`) so several products can be created
    /// in the same test.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ProductFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::product::entity_builder()
            .name(format!("Product {}", next_id()))
            .build();

        Self {
            db,
            entity,
            category_ids: Vec::new(),
        }
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Sets the product price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.entity.price = price;
        self
    }

    /// Sets the product date.
    pub fn date(mut self, date: DateTimeUtc) -> Self {
        self.entity.date = date;
        self
    }

    /// Attaches an existing category to the product.
    ///
    /// # Arguments
    /// - `category_id` - ID of a category that already exists
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_ids.push(category_id);
        self
    }

    /// Builds and inserts the product entity and its category links.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            price: ActiveValue::Set(self.entity.price),
            img_url: ActiveValue::Set(self.entity.img_url),
            date: ActiveValue::Set(self.entity.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in self.category_ids {
            entity::product_category::ActiveModel {
                product_id: ActiveValue::Set(product.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(product)
    }
}

/// Creates a product with default values and no categories.
///
/// Shorthand for `ProductFactory::new(db).build().await`.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
