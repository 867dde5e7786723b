use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::StandardErrorDto, role::RoleDto},
    server::{
        controller::extract::PathId, error::AppError, model::role::Role,
        service::role::RoleService, state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// Get every role.
#[utoipa::path(
    get,
    path = "/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RoleDto>),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_roles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roles = RoleService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(roles.into_iter().map(Role::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a role by ID.
#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "The role", body = RoleDto),
        (status = 404, description = "Role not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_role_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let role = RoleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}
