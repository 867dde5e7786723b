//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Units of work**: every multi-statement write runs inside one database transaction
//! - **Error translation**: store failures become `NotFound` or `DatabaseIntegrity`
//!   before they leave this layer
//! - **Domain Models**: working with domain models rather than DTOs or entity models

pub mod category;
pub mod client;
pub mod product;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Translates a store error from a write into a domain error.
///
/// - Foreign key violations (a referenced row is deleted, or a link points at a
///   missing row) and unique violations become `DatabaseIntegrity`
/// - `RecordNotFound` keeps its message as `NotFound`
/// - `RecordNotUpdated` means the row vanished between read and write, so `NotFound`
/// - Anything else stays a `DbErr` and is answered with a generic 500
pub(crate) fn translate_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key violation: {}", detail);
            return AppError::DatabaseIntegrity("Integrity violation".to_string());
        }
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique violation: {}", detail);
            return AppError::DatabaseIntegrity(
                "Integrity violation: value already in use".to_string(),
            );
        }
        _ => {}
    }

    match err {
        DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
        DbErr::RecordNotUpdated => AppError::NotFound("Entity not found".to_string()),
        other => AppError::DbErr(other),
    }
}

/// Error returned when an id does not resolve to a row.
pub(crate) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Id not found {}", id))
}
