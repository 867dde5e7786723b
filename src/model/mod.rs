//! Transport models (DTOs) exchanged over the HTTP API.
//!
//! These types are the JSON shape of requests and responses. They are built from
//! entities in `server::model` and never persisted directly.

pub mod api;
pub mod category;
pub mod client;
pub mod page;
pub mod product;
pub mod role;
pub mod user;
