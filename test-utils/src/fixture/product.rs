//! Product fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating product entity models without database insertion.
//! These are useful for unit testing mapping code and as factory defaults.

use chrono::{TimeZone, Utc};
use entity::product;
use sea_orm::prelude::{DateTimeUtc, Decimal};

/// Default test product name.
pub const DEFAULT_NAME: &str = "Phone";

/// Default test product description.
pub const DEFAULT_DESCRIPTION: &str = "Good Phone";

/// Default test product image URL.
pub const DEFAULT_IMG_URL: &str = "https://img.com/img.png";

/// Default test product price (800.00).
pub fn default_price() -> Decimal {
    Decimal::new(80000, 2)
}

/// Default test product date (2020-07-13T20:50:07Z).
pub fn default_date() -> DateTimeUtc {
    Utc.with_ymd_and_hms(2020, 7, 13, 20, 50, 7).unwrap()
}

/// Creates a product entity model with default values.
///
/// This function creates an in-memory product entity without inserting into the database.
///
/// # Default Values
/// - id: `1`
/// - name: `"Phone"`
/// - description: `"Good Phone"`
/// - price: `800.00`
/// - img_url: `"https://img.com/img.png"`
/// - date: `2020-07-13T20:50:07Z`
///
/// # Returns
/// - `product::Model` - In-memory product entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let product = fixture::product::entity();
/// assert_eq!(product.name, "Phone");
/// ```
pub fn entity() -> product::Model {
    entity_builder().build()
}

/// Creates a product entity builder for customization.
///
/// # Returns
/// - `ProductEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> ProductEntityBuilder {
    ProductEntityBuilder::default()
}

/// Builder for creating customized product entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct ProductEntityBuilder {
    id: i32,
    name: String,
    description: String,
    price: Decimal,
    img_url: String,
    date: DateTimeUtc,
}

impl Default for ProductEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            price: default_price(),
            img_url: DEFAULT_IMG_URL.to_string(),
            date: default_date(),
        }
    }
}

impl ProductEntityBuilder {
    /// Sets the product ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the product price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Sets the product image URL.
    pub fn img_url(mut self, img_url: impl Into<String>) -> Self {
        self.img_url = img_url.into();
        self
    }

    /// Sets the product date.
    pub fn date(mut self, date: DateTimeUtc) -> Self {
        self.date = date;
        self
    }

    /// Builds and returns the product entity model.
    ///
    /// # Returns
    /// - `product::Model` - In-memory product entity with configured values
    pub fn build(self) -> product::Model {
        product::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            date: self.date,
        }
    }
}
