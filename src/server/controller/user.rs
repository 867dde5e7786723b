use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::StandardErrorDto,
        page::PageDto,
        user::{UserDto, UserInsertDto},
    },
    server::{
        controller::extract::{Pageable, PathId, ValidatedJson},
        error::AppError,
        model::user::{CreateUserParams, User, UserParams, UserSortField},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a page of users with their roles.
///
/// # Returns
/// - `200 OK` - Page envelope of users; passwords are never included
/// - `400 Bad Request` - Invalid paging parameter or unknown sort property
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page index (default: 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default: 12)"),
        ("sort" = Option<Vec<String>>, Query, description = "`field[,field...][,asc|desc]`; fields: id, name, email")
    ),
    responses(
        (status = 200, description = "Page of users", body = PageDto<UserDto>),
        (status = 400, description = "Invalid paging parameters", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Pageable(request): Pageable<UserSortField>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let page = service.get_paginated(request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(User::into_dto))))
}

/// Get a user by ID with roles.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with roles", body = UserDto),
        (status = 404, description = "User not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create a new user.
///
/// Accepts the public user fields plus a write-only `password`, which is stored as a
/// bcrypt hash and never returned.
///
/// # Returns
/// - `201 Created` - Created user, with `Location: /users/{id}`
/// - `400 Bad Request` - Malformed JSON or email already in use
/// - `404 Not Found` - A referenced role does not exist
/// - `422 Unprocessable Entity` - Field validation failed
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserInsertDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Malformed request body or duplicate email", body = StandardErrorDto),
        (status = 404, description = "Role not found", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserInsertDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.create(CreateUserParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", user.id))],
        Json(user.into_dto()),
    ))
}

/// Update a user's name, email and roles.
///
/// The password cannot be changed through this endpoint.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Malformed JSON or email already in use
/// - `404 Not Found` - User or a referenced role does not exist
/// - `422 Unprocessable Entity` - Field validation failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Malformed request body or duplicate email", body = StandardErrorDto),
        (status = 404, description = "User not found", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.update(id, UserParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 404, description = "User not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
