//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the writable
//! fields of a validated DTO into the service layer.

pub mod category;
pub mod client;
pub mod page;
pub mod product;
pub mod role;
pub mod user;
pub mod validation;
