use super::common::{created_response, found_response, list_response, ValidatedJson};
use crate::{
    dto::{PurchaseRequest, PurchaseResponse},
    errors::{ErrorResponse, ServiceError},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

const RESOURCE: &str = "purchase";

/// Routes mounted under `/api/purchase`.
pub fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchases).post(create_purchase))
        .route("/:id", get(get_purchase).put(update_purchase).delete(delete_purchase))
}

/// List every purchase
#[utoipa::path(
    get,
    path = "/api/purchase",
    tag = "purchase",
    responses(
        (status = 200, description = "Purchases found", body = [PurchaseResponse]),
        (status = 204, description = "No purchases stored"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_purchases(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let items = state.services.purchases.get_all_purchases().await?;
    Ok(list_response(items))
}

/// Fetch one purchase by id
#[utoipa::path(
    get,
    path = "/api/purchase/{id}",
    tag = "purchase",
    params(("id" = i32, Path, description = "Purchase id")),
    responses(
        (status = 200, description = "Purchase found", body = PurchaseResponse),
        (status = 404, description = "Purchase not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let item = state.services.purchases.get_purchase_by_id(id).await?;
    found_response(item, RESOURCE, id)
}

/// Create a purchase
#[utoipa::path(
    post,
    path = "/api/purchase",
    tag = "purchase",
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Purchase created", body = PurchaseResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PurchaseRequest>,
) -> Result<Response, ServiceError> {
    let created = state.services.purchases.create_purchase(request).await?;
    created_response(created, RESOURCE)
}

/// Overwrite a purchase
#[utoipa::path(
    put,
    path = "/api/purchase/{id}",
    tag = "purchase",
    params(("id" = i32, Path, description = "Purchase id")),
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Purchase updated", body = PurchaseResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Purchase not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PurchaseRequest>,
) -> Result<Response, ServiceError> {
    let updated = state.services.purchases.update_purchase(id, request).await?;
    found_response(updated, RESOURCE, id)
}

/// Delete a purchase, returning it as it was
#[utoipa::path(
    delete,
    path = "/api/purchase/{id}",
    tag = "purchase",
    params(("id" = i32, Path, description = "Purchase id")),
    responses(
        (status = 200, description = "Purchase deleted", body = PurchaseResponse),
        (status = 404, description = "Purchase not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let deleted = state.services.purchases.delete_purchase(id).await?;
    found_response(deleted, RESOURCE, id)
}
