//! HTTP request handlers.
//!
//! Controllers convert DTOs to parameter models, call the matching service and convert
//! the returned domain models back to DTOs. They perform no error translation: every
//! failure is an `AppError` mapped to a status code by its `IntoResponse` impl.

pub mod category;
pub mod client;
pub mod extract;
pub mod product;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;
