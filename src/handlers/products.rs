use super::common::{created_response, found_response, list_response, ValidatedJson};
use crate::{
    dto::{ProductRequest, ProductResponse},
    errors::{ErrorResponse, ServiceError},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

const RESOURCE: &str = "product";

/// Routes mounted under `/api/product`.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
}

/// List every product
#[utoipa::path(
    get,
    path = "/api/product",
    tag = "product",
    responses(
        (status = 200, description = "Products found", body = [ProductResponse]),
        (status = 204, description = "No products stored"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let items = state.services.products.get_all_products().await?;
    Ok(list_response(items))
}

/// Fetch one product by id
#[utoipa::path(
    get,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let item = state.services.products.get_product_by_id(id).await?;
    found_response(item, RESOURCE, id)
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/product",
    tag = "product",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<Response, ServiceError> {
    let created = state.services.products.create_product(request).await?;
    created_response(created, RESOURCE)
}

/// Overwrite a product
#[utoipa::path(
    put,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<Response, ServiceError> {
    let updated = state.services.products.update_product(id, request).await?;
    found_response(updated, RESOURCE, id)
}

/// Delete a product, returning it as it was
#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let deleted = state.services.products.delete_product(id).await?;
    found_response(deleted, RESOURCE, id)
}
