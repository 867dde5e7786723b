//! Stamps the request path into JSON error bodies.
//!
//! `AppError::into_response` has no access to the request, so it stores its
//! `StandardErrorDto` in the response extensions with an empty path. This middleware
//! rebuilds the body with the path of the request that failed.

use axum::{
    extract::Request,
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::StandardErrorDto;

/// Fills `path` of an error body produced by `AppError`.
///
/// Responses without a `StandardErrorDto` extension pass through unchanged.
pub async fn error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let Some(mut body) = response.extensions().get::<StandardErrorDto>().cloned() else {
        return response;
    };
    body.path = path;

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);

    (parts, Json(body)).into_response()
}
