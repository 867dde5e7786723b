//! Route table and OpenAPI documentation.

use axum::{middleware::from_fn, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{category, client, product, role, user},
    middleware::error_path::error_path,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Catalog API",
    description = "Products, categories, clients, users and roles"
))]
struct ApiDoc;

/// Builds the resource routes plus Swagger UI at `/swagger-ui`, serving the OpenAPI
/// document at `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(product::get_products, product::create_product))
        .routes(routes!(
            product::get_product_by_id,
            product::update_product,
            product::delete_product
        ))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category_by_id,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(client::get_clients, client::create_client))
        .routes(routes!(
            client::get_client_by_id,
            client::update_client,
            client::delete_client
        ))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(role::get_roles))
        .routes(routes!(role::get_role_by_id))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

/// Builds the application with state, error-path stamping and request tracing.
///
/// CORS is layered on separately at startup since it depends on configuration.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(from_fn(error_path))
        .layer(TraceLayer::new_for_http())
}
