//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, which is the single place where error kinds become status codes.

pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

use crate::{
    model::api::{FieldMessageDto, StandardErrorDto},
    server::error::{config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Store failures are translated into
/// `NotFound` or `DatabaseIntegrity` by the service layer; a `DbErr` that reaches this
/// type unchanged is unexpected and answered with a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal error indicating a bug or broken invariant.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM that has no domain meaning.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Requested id does not exist.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// A write violated a referential or uniqueness constraint.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    DatabaseIntegrity(String),

    /// Well-formed input that violates field constraints.
    ///
    /// Results in 422 Unprocessable Entity listing every violated field.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldMessageDto>),

    /// Invalid request error (malformed body, bad query parameters).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and a `StandardErrorDto`
/// body. Internal errors are logged with full details but return generic messages to
/// avoid information leakage. The body is also stored in the response extensions so
/// the `error_path` middleware can stamp the request path into it.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `DatabaseIntegrity`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `Validation`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                error_response(StatusCode::NOT_FOUND, "Resource not found", msg, Vec::new())
            }
            Self::DatabaseIntegrity(msg) => {
                error_response(StatusCode::BAD_REQUEST, "Database exception", msg, Vec::new())
            }
            Self::Validation(errors) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation exception",
                "Invalid input data".to_string(),
                errors,
            ),
            Self::BadRequest(msg) => {
                error_response(StatusCode::BAD_REQUEST, "Bad request", msg, Vec::new())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error response shared by every error kind.
///
/// The path is left empty here; it is filled in by the `error_path` middleware which
/// has access to the request URI.
fn error_response(
    status: StatusCode,
    error: &str,
    message: String,
    errors: Vec<FieldMessageDto>,
) -> Response {
    let body = StandardErrorDto {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error: error.to_string(),
        message,
        path: String::new(),
        errors,
    };

    let mut response = (status, Json(body.clone())).into_response();
    response.extensions_mut().insert(body);
    response
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "Internal server error".to_string(),
            Vec::new(),
        )
    }
}
