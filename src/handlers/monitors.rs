use super::common::{created_response, found_response, list_response, ValidatedJson};
use crate::{
    dto::{MonitorRequest, MonitorResponse},
    errors::{ErrorResponse, ServiceError},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

const RESOURCE: &str = "monitor";

/// Routes mounted under `/api/monitor`.
pub fn monitor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_monitors).post(create_monitor))
        .route("/:id", get(get_monitor).put(update_monitor).delete(delete_monitor))
}

/// List every monitor
#[utoipa::path(
    get,
    path = "/api/monitor",
    tag = "monitor",
    responses(
        (status = 200, description = "Monitors found", body = [MonitorResponse]),
        (status = 204, description = "No monitors stored"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_monitors(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let items = state.services.monitors.get_all_monitors().await?;
    Ok(list_response(items))
}

/// Fetch one monitor by id
#[utoipa::path(
    get,
    path = "/api/monitor/{id}",
    tag = "monitor",
    params(("id" = i32, Path, description = "Monitor id")),
    responses(
        (status = 200, description = "Monitor found", body = MonitorResponse),
        (status = 404, description = "Monitor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_monitor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let item = state.services.monitors.get_monitor_by_id(id).await?;
    found_response(item, RESOURCE, id)
}

/// Create a monitor
#[utoipa::path(
    post,
    path = "/api/monitor",
    tag = "monitor",
    request_body = MonitorRequest,
    responses(
        (status = 200, description = "Monitor created", body = MonitorResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_monitor(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MonitorRequest>,
) -> Result<Response, ServiceError> {
    let created = state.services.monitors.create_monitor(request).await?;
    created_response(created, RESOURCE)
}

/// Overwrite a monitor
#[utoipa::path(
    put,
    path = "/api/monitor/{id}",
    tag = "monitor",
    params(("id" = i32, Path, description = "Monitor id")),
    request_body = MonitorRequest,
    responses(
        (status = 200, description = "Monitor updated", body = MonitorResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Monitor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_monitor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<MonitorRequest>,
) -> Result<Response, ServiceError> {
    let updated = state.services.monitors.update_monitor(id, request).await?;
    found_response(updated, RESOURCE, id)
}

/// Delete a monitor, returning it as it was
#[utoipa::path(
    delete,
    path = "/api/monitor/{id}",
    tag = "monitor",
    params(("id" = i32, Path, description = "Monitor id")),
    responses(
        (status = 200, description = "Monitor deleted", body = MonitorResponse),
        (status = 404, description = "Monitor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_monitor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let deleted = state.services.monitors.delete_monitor(id).await?;
    found_response(deleted, RESOURCE, id)
}
