use super::{CrudTable, Repository};
use crate::entities::{category, game, product};
use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, LoaderTrait};
use std::sync::Arc;

/// A game row together with whatever product and category rows it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game: game::Model,
    pub product: Option<product::Model>,
    pub category: Option<category::Model>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn select_all(&self) -> Result<Vec<GameRecord>, ServiceError>;
    async fn select_by_id(&self, id: i32) -> Result<Option<GameRecord>, ServiceError>;
    async fn insert(&self, row: game::ActiveModel) -> Result<Option<GameRecord>, ServiceError>;
    async fn update_by_id(
        &self,
        id: i32,
        patch: game::ActiveModel,
    ) -> Result<Option<GameRecord>, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<Option<GameRecord>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmGameRepository {
    table: CrudTable<game::Entity>,
}

impl SeaOrmGameRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            table: CrudTable::new(db, "game"),
        }
    }

    async fn attach(&self, games: Vec<game::Model>) -> Result<Vec<GameRecord>, ServiceError> {
        if games.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.table.get_db();
        let products = games.load_one(product::Entity, db).await?;
        let categories = games.load_one(category::Entity, db).await?;

        Ok(games
            .into_iter()
            .zip(products)
            .zip(categories)
            .map(|((game, product), category)| GameRecord {
                game,
                product,
                category,
            })
            .collect())
    }

    async fn attach_one(
        &self,
        game: Option<game::Model>,
    ) -> Result<Option<GameRecord>, ServiceError> {
        match game {
            Some(game) => Ok(self.attach(vec![game]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl GameRepository for SeaOrmGameRepository {
    async fn select_all(&self) -> Result<Vec<GameRecord>, ServiceError> {
        let games = self.table.all().await?;
        self.attach(games).await
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<GameRecord>, ServiceError> {
        let game = self.table.by_id(id).await?;
        self.attach_one(game).await
    }

    async fn insert(&self, row: game::ActiveModel) -> Result<Option<GameRecord>, ServiceError> {
        let inserted = self.table.insert(row).await?;
        self.select_by_id(inserted.id).await
    }

    async fn update_by_id(
        &self,
        id: i32,
        patch: game::ActiveModel,
    ) -> Result<Option<GameRecord>, ServiceError> {
        let updated = self.table.update(id, patch).await?;
        self.attach_one(updated).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<GameRecord>, ServiceError> {
        // Relations must be read before the row goes away.
        let Some(snapshot) = self.select_by_id(id).await? else {
            return Ok(None);
        };
        self.table.delete(id).await?;
        Ok(Some(snapshot))
    }
}
