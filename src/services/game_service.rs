use crate::dto::{CategoryResponse, GameRequest, GameResponse, ProductResponse};
use crate::entities::game;
use crate::errors::ServiceError;
use crate::repositories::{GameRecord, GameRepository};
use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait GameService: Send + Sync {
    async fn create_game(
        &self,
        request: GameRequest,
    ) -> Result<Option<GameResponse>, ServiceError>;
    async fn get_all_games(&self) -> Result<Vec<GameResponse>, ServiceError>;
    async fn get_game_by_id(&self, id: i32) -> Result<Option<GameResponse>, ServiceError>;
    async fn update_game(
        &self,
        id: i32,
        request: GameRequest,
    ) -> Result<Option<GameResponse>, ServiceError>;
    async fn delete_game(&self, id: i32) -> Result<Option<GameResponse>, ServiceError>;
}

/// Product and category are emitted together or not at all: a game whose
/// product or category row is missing gets two default nested objects.
fn game_response(record: GameRecord) -> GameResponse {
    let GameRecord {
        game,
        product,
        category,
    } = record;
    let (product, category): (ProductResponse, CategoryResponse) = match (product, category) {
        (Some(product), Some(category)) => (product.into(), category.into()),
        _ => Default::default(),
    };

    GameResponse {
        id: game.id,
        publisher: game.publisher,
        published_year: game.published_year,
        language: game.language,
        genre: game.genre,
        product_id: game.product_id,
        category_id: game.category_id,
        product,
        category,
    }
}

fn game_row(request: GameRequest) -> game::ActiveModel {
    game::ActiveModel {
        publisher: Set(request.publisher),
        published_year: Set(request.published_year),
        language: Set(request.language),
        genre: Set(request.genre),
        product_id: Set(request.product_id),
        category_id: Set(request.category_id),
        ..Default::default()
    }
}

pub struct GameServiceImpl {
    repository: Arc<dyn GameRepository>,
}

impl GameServiceImpl {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GameService for GameServiceImpl {
    #[instrument(skip(self))]
    async fn create_game(
        &self,
        request: GameRequest,
    ) -> Result<Option<GameResponse>, ServiceError> {
        let created = self.repository.insert(game_row(request)).await?;
        Ok(created.map(game_response))
    }

    async fn get_all_games(&self) -> Result<Vec<GameResponse>, ServiceError> {
        let records = self.repository.select_all().await?;
        Ok(records.into_iter().map(game_response).collect())
    }

    async fn get_game_by_id(&self, id: i32) -> Result<Option<GameResponse>, ServiceError> {
        Ok(self.repository.select_by_id(id).await?.map(game_response))
    }

    #[instrument(skip(self))]
    async fn update_game(
        &self,
        id: i32,
        request: GameRequest,
    ) -> Result<Option<GameResponse>, ServiceError> {
        let updated = self.repository.update_by_id(id, game_row(request)).await?;
        Ok(updated.map(game_response))
    }

    #[instrument(skip(self))]
    async fn delete_game(&self, id: i32) -> Result<Option<GameResponse>, ServiceError> {
        Ok(self.repository.delete_by_id(id).await?.map(game_response))
    }
}
