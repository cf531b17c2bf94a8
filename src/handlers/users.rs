use super::common::{created_response, found_response, list_response, ValidatedJson};
use crate::{
    dto::{UserRequest, UserResponse},
    errors::{ErrorResponse, ServiceError},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

const RESOURCE: &str = "user";

/// Routes mounted under `/api/user`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List every user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "user",
    responses(
        (status = 200, description = "Users found", body = [UserResponse]),
        (status = 204, description = "No users stored"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let items = state.services.users.get_all_users().await?;
    Ok(list_response(items))
}

/// Fetch one user by id
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let item = state.services.users.get_user_by_id(id).await?;
    found_response(item, RESOURCE, id)
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "user",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<Response, ServiceError> {
    let created = state.services.users.create_user(request).await?;
    created_response(created, RESOURCE)
}

/// Overwrite a user
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<Response, ServiceError> {
    let updated = state.services.users.update_user(id, request).await?;
    found_response(updated, RESOURCE, id)
}

/// Delete a user, returning it as it was
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let deleted = state.services.users.delete_user(id).await?;
    found_response(deleted, RESOURCE, id)
}
