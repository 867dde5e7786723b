//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// name or email to prevent collisions with unique constraints.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and a product attached to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, product))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::product::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let product = crate::factory::product::ProductFactory::new(db)
        .category(category.id)
        .build()
        .await?;

    Ok((category, product))
}

/// Creates one product per name, in the given order.
///
/// Useful for sorting tests where only the names matter. Products are created
/// without categories.
///
/// # Arguments
/// - `db` - Database connection
/// - `names` - Product names, inserted in slice order
///
/// # Returns
/// - `Ok(Vec<product::Model>)` - Created products in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_products_named(
    db: &DatabaseConnection,
    names: &[&str],
) -> Result<Vec<entity::product::Model>, DbErr> {
    let mut products = Vec::with_capacity(names.len());
    for name in names {
        let product = crate::factory::product::ProductFactory::new(db)
            .name(*name)
            .build()
            .await?;
        products.push(product);
    }

    Ok(products)
}

/// Creates a user holding a freshly created role.
///
/// # Returns
/// - `Ok((role, user))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
) -> Result<(entity::role::Model, entity::user::Model), DbErr> {
    let role = crate::factory::role::create_role(db).await?;
    let user = crate::factory::user::UserFactory::new(db)
        .role(role.id)
        .build()
        .await?;

    Ok((role, user))
}
