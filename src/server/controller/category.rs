use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::StandardErrorDto, category::CategoryDto},
    server::{
        controller::extract::{PathId, ValidatedJson},
        error::AppError,
        model::category::{Category, CategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get every category.
///
/// Categories are a small, complete set and are returned unpaged in id order.
///
/// # Returns
/// - `200 OK` - List of all categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(Category::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a category by ID.
///
/// # Returns
/// - `200 OK` - The category
/// - `404 Not Found` - No category with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a new category.
///
/// # Returns
/// - `201 Created` - Created category, with `Location: /categories/{id}`
/// - `400 Bad Request` - Malformed JSON
/// - `422 Unprocessable Entity` - Blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORY_TAG,
    request_body = CategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Malformed request body", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.create(CategoryParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/categories/{}", category.id))],
        Json(category.into_dto()),
    ))
}

/// Rename a category.
///
/// # Returns
/// - `200 OK` - Updated category
/// - `400 Bad Request` - Malformed JSON
/// - `404 Not Found` - No category with that ID
/// - `422 Unprocessable Entity` - Blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Malformed request body", body = StandardErrorDto),
        (status = 404, description = "Category not found", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.update(id, CategoryParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category.
///
/// A category still assigned to a product cannot be deleted.
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `400 Bad Request` - Category is still referenced by a product
/// - `404 Not Found` - No category with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 400, description = "Category still referenced", body = StandardErrorDto),
        (status = 404, description = "Category not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
