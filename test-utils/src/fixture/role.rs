//! Role fixtures for creating in-memory test data.

use entity::role;

/// Default authority granted by the role fixture.
pub const DEFAULT_AUTHORITY: &str = "ROLE_OPERATOR";

/// Creates a role entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - authority: `"ROLE_OPERATOR"`
pub fn entity() -> role::Model {
    role::Model {
        id: 1,
        authority: DEFAULT_AUTHORITY.to_string(),
    }
}
