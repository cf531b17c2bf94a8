use super::common::{created_response, found_response, list_response, ValidatedJson};
use crate::{
    dto::{CategoryRequest, CategoryResponse},
    errors::{ErrorResponse, ServiceError},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

const RESOURCE: &str = "category";

/// Routes mounted under `/api/category`.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category).put(update_category).delete(delete_category))
}

/// List every category
#[utoipa::path(
    get,
    path = "/api/category",
    tag = "category",
    responses(
        (status = 200, description = "Categories found", body = [CategoryResponse]),
        (status = 204, description = "No categories stored"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let items = state.services.categories.get_all_categories().await?;
    Ok(list_response(items))
}

/// Fetch one category by id
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let item = state.services.categories.get_category_by_id(id).await?;
    found_response(item, RESOURCE, id)
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/category",
    tag = "category",
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> Result<Response, ServiceError> {
    let created = state.services.categories.create_category(request).await?;
    created_response(created, RESOURCE)
}

/// Overwrite a category
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> Result<Response, ServiceError> {
    let updated = state.services.categories.update_category(id, request).await?;
    found_response(updated, RESOURCE, id)
}

/// Delete a category, returning it as it was
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let deleted = state.services.categories.delete_category(id).await?;
    found_response(deleted, RESOURCE, id)
}
