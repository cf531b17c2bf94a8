use super::common::{created_response, found_response, list_response, ValidatedJson};
use crate::{
    dto::{GameRequest, GameResponse},
    errors::{ErrorResponse, ServiceError},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

const RESOURCE: &str = "game";

/// Routes mounted under `/api/game`.
pub fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games).post(create_game))
        .route("/:id", get(get_game).put(update_game).delete(delete_game))
}

/// List every game
#[utoipa::path(
    get,
    path = "/api/game",
    tag = "game",
    responses(
        (status = 200, description = "Games found", body = [GameResponse]),
        (status = 204, description = "No games stored"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_games(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let items = state.services.games.get_all_games().await?;
    Ok(list_response(items))
}

/// Fetch one game by id
#[utoipa::path(
    get,
    path = "/api/game/{id}",
    tag = "game",
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, description = "Game found", body = GameResponse),
        (status = 404, description = "Game not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let item = state.services.games.get_game_by_id(id).await?;
    found_response(item, RESOURCE, id)
}

/// Create a game
#[utoipa::path(
    post,
    path = "/api/game",
    tag = "game",
    request_body = GameRequest,
    responses(
        (status = 200, description = "Game created", body = GameResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_game(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GameRequest>,
) -> Result<Response, ServiceError> {
    let created = state.services.games.create_game(request).await?;
    created_response(created, RESOURCE)
}

/// Overwrite a game
#[utoipa::path(
    put,
    path = "/api/game/{id}",
    tag = "game",
    params(("id" = i32, Path, description = "Game id")),
    request_body = GameRequest,
    responses(
        (status = 200, description = "Game updated", body = GameResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Game not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<GameRequest>,
) -> Result<Response, ServiceError> {
    let updated = state.services.games.update_game(id, request).await?;
    found_response(updated, RESOURCE, id)
}

/// Delete a game, returning it as it was
#[utoipa::path(
    delete,
    path = "/api/game/{id}",
    tag = "game",
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, description = "Game deleted", body = GameResponse),
        (status = 404, description = "Game not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let deleted = state.services.games.delete_game(id).await?;
    found_response(deleted, RESOURCE, id)
}
