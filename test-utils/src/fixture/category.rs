//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Electronics";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `2`
/// - name: `"Electronics"`
///
/// # Returns
/// - `category::Model` - In-memory category entity
pub fn entity() -> category::Model {
    category::Model {
        id: 2,
        name: DEFAULT_NAME.to_string(),
    }
}
