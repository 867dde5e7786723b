//! Request extractors shared by the resource controllers.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::{
    error::AppError,
    model::{
        page::{PageRequest, SortField},
        validation::Validate,
    },
    state::AppState,
};

/// Page window and sort keys parsed from `page`, `size` and repeatable `sort` query
/// parameters, bounded by the configured page sizes.
///
/// Rejects with 400 when a value is unparsable, the size is out of range or a sort
/// property is not sortable for the resource.
pub struct Pageable<F>(pub PageRequest<F>);

impl<F> FromRequestParts<AppState> for Pageable<F>
where
    F: SortField + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(PageRequest::from_query(&pairs, &state.page_defaults)?))
    }
}

/// Numeric resource id taken from the `{id}` path segment.
///
/// Rejects with 400 when the segment is not a valid `i32`.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}

/// JSON body that has passed field validation.
///
/// Malformed JSON is rejected with 400; a well-formed body that violates field
/// constraints is rejected with 422 listing every violated field.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}
