//! SeaORM entity definitions for the catalog schema.
//!
//! Each module maps one table. The `product_category` and `user_role` modules are
//! plain join tables; the many-to-many relations are exposed through `Related`
//! implementations with `via()` so either side can load the other explicitly.

pub mod prelude;

pub mod category;
pub mod client;
pub mod product;
pub mod product_category;
pub mod role;
pub mod user;
pub mod user_role;
