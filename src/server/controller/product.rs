use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::StandardErrorDto, page::PageDto, product::ProductDto},
    server::{
        controller::extract::{Pageable, PathId, ValidatedJson},
        error::AppError,
        model::product::{Product, ProductParams, ProductSortField},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Get a page of products.
///
/// Returns products with their categories, sorted by the requested keys and then by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `pageable` - Page index, size and sort keys from the query string
///
/// # Returns
/// - `200 OK` - Page envelope of products
/// - `400 Bad Request` - Invalid paging parameter or unknown sort property
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page index (default: 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default: 12)"),
        ("sort" = Option<Vec<String>>, Query, description = "`field[,field...][,asc|desc]`; fields: id, name, price, date")
    ),
    responses(
        (status = 200, description = "Page of products", body = PageDto<ProductDto>),
        (status = 400, description = "Invalid paging parameters", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Pageable(request): Pageable<ProductSortField>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let page = service.get_paginated(request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Product::into_dto))))
}

/// Get a product by ID with its categories.
///
/// # Returns
/// - `200 OK` - The product
/// - `404 Not Found` - No product with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with categories", body = ProductDto),
        (status = 404, description = "Product not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Create a new product.
///
/// The body id is ignored; `categories` only needs ids and sets the product's categories.
///
/// # Returns
/// - `201 Created` - Created product, with `Location: /products/{id}`
/// - `400 Bad Request` - Malformed JSON
/// - `404 Not Found` - A referenced category does not exist
/// - `422 Unprocessable Entity` - Field validation failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Malformed request body", body = StandardErrorDto),
        (status = 404, description = "Category not found", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.create(ProductParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/products/{}", product.id))],
        Json(product.into_dto()),
    ))
}

/// Update an existing product.
///
/// Copies every field of the body onto the product and replaces its categories.
///
/// # Returns
/// - `200 OK` - Updated product
/// - `400 Bad Request` - Malformed JSON
/// - `404 Not Found` - Product or a referenced category does not exist
/// - `422 Unprocessable Entity` - Field validation failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Successfully updated product", body = ProductDto),
        (status = 400, description = "Malformed request body", body = StandardErrorDto),
        (status = 404, description = "Product not found", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.update(id, ProductParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product.
///
/// # Returns
/// - `204 No Content` - Product deleted
/// - `404 Not Found` - No product with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted product"),
        (status = 404, description = "Product not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
