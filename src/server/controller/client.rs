use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::StandardErrorDto, client::ClientDto, page::PageDto},
    server::{
        controller::extract::{Pageable, PathId, ValidatedJson},
        error::AppError,
        model::client::{Client, ClientParams, ClientSortField},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Get a page of clients.
#[utoipa::path(
    get,
    path = "/clients",
    tag = CLIENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page index (default: 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default: 12)"),
        ("sort" = Option<Vec<String>>, Query, description = "`field[,field...][,asc|desc]`; fields: id, name, cpf, income, birthDate")
    ),
    responses(
        (status = 200, description = "Page of clients", body = PageDto<ClientDto>),
        (status = 400, description = "Invalid paging parameters", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    Pageable(request): Pageable<ClientSortField>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let page = service.get_paginated(request).await?;

    Ok((StatusCode::OK, Json(page.into_dto(Client::into_dto))))
}

/// Get a client by ID.
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "The client", body = ClientDto),
        (status = 404, description = "Client not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn get_client_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let client = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Create a new client.
///
/// The CPF may be sent with punctuation; it is stored as 11 digits.
#[utoipa::path(
    post,
    path = "/clients",
    tag = CLIENT_TAG,
    request_body = ClientDto,
    responses(
        (status = 201, description = "Successfully created client", body = ClientDto),
        (status = 400, description = "Malformed request body", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let client = service.create(ClientParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/clients/{}", client.id))],
        Json(client.into_dto()),
    ))
}

/// Update an existing client.
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = ClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = ClientDto),
        (status = 400, description = "Malformed request body", body = StandardErrorDto),
        (status = 404, description = "Client not found", body = StandardErrorDto),
        (status = 422, description = "Validation failed", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<ClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let client = service.update(id, ClientParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Delete a client.
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted client"),
        (status = 404, description = "Client not found", body = StandardErrorDto),
        (status = 500, description = "Internal server error", body = StandardErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
