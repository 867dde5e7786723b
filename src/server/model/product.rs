//! Product domain models and parameters.
//!
//! A product is always materialized together with its category set, which the
//! repository loads with an explicit join query.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    model::product::ProductDto,
    server::model::{category::Category, page::SortField},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub img_url: String,
    pub date: DateTime<Utc>,
    /// Ordered by category id.
    pub categories: Vec<Category>,
}

impl Product {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The product row
    /// - `categories` - Categories linked to the product through the join table
    pub fn from_entity(
        entity: entity::product::Model,
        categories: Vec<entity::category::Model>,
    ) -> Self {
        let mut categories: Vec<Category> = categories.into_iter().map(Category::from_entity).collect();
        categories.sort_by_key(|c| c.id);

        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            img_url: entity.img_url,
            date: entity.date,
            categories,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            date: self.date,
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
        }
    }
}

/// Writable fields of a product for create and update operations.
///
/// Update copies every scalar field and replaces the category set with
/// `category_ids`.
#[derive(Debug, Clone)]
pub struct ProductParams {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub img_url: String,
    pub date: DateTime<Utc>,
    pub category_ids: Vec<i32>,
}

impl ProductParams {
    /// Converts a validated DTO; the DTO id is ignored and category ids are deduplicated.
    pub fn from_dto(dto: ProductDto) -> Self {
        let mut category_ids: Vec<i32> = dto.categories.iter().filter_map(|c| c.id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            price: dto.price,
            img_url: dto.img_url,
            date: dto.date,
            category_ids,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortField {
    Id,
    Name,
    Price,
    Date,
}

impl SortField for ProductSortField {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    fn property(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::Date => "date",
        }
    }
}
