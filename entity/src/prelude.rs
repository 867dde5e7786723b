pub use super::category::Entity as Category;
pub use super::client::Entity as Client;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
