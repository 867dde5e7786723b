//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take their defaults from the matching
//! fixture and give each row a unique name so several can coexist in one database.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create a product attached to the category
//!     let product = factory::product::ProductFactory::new(&db)
//!         .name("Macbook Pro")
//!         .category(category.id)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `category` - Create category entities
//! - `product` - Create product entities and their category links
//! - `client` - Create client entities
//! - `role` - Create role entities
//! - `user` - Create user entities and their role links
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod category;
pub mod client;
pub mod helpers;
pub mod product;
pub mod role;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use client::create_client;
pub use product::create_product;
pub use role::create_role;
pub use user::create_user;
