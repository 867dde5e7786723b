//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test mapping logic without database overhead
//! - **Default values**: Provide consistent defaults for factory builders
//! - **Serialization tests**: Test DTO conversion without persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let product = fixture::product::entity();
//!
//! // Create with custom fields
//! let cheap = fixture::product::entity_builder()
//!     .price(Decimal::new(999, 2))
//!     .build();
//! ```

pub mod category;
pub mod client;
pub mod product;
pub mod role;
pub mod user;

pub use category::entity as category_entity;
pub use client::{entity as client_entity, entity_builder as client_entity_builder};
pub use product::{entity as product_entity, entity_builder as product_entity_builder};
pub use role::entity as role_entity;
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
