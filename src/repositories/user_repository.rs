use super::CrudTable;
use crate::entities::user;
use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn select_all(&self) -> Result<Vec<user::Model>, ServiceError>;
    async fn select_by_id(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
    async fn insert(
        &self,
        row: user::ActiveModel,
    ) -> Result<Option<user::Model>, ServiceError>;
    async fn update_by_id(
        &self,
        id: i32,
        patch: user::ActiveModel,
    ) -> Result<Option<user::Model>, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmUserRepository {
    table: CrudTable<user::Entity>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            table: CrudTable::new(db, "user"),
        }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn select_all(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.table.all().await
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        self.table.by_id(id).await
    }

    async fn insert(
        &self,
        row: user::ActiveModel,
    ) -> Result<Option<user::Model>, ServiceError> {
        self.table.insert(row).await.map(Some)
    }

    async fn update_by_id(
        &self,
        id: i32,
        patch: user::ActiveModel,
    ) -> Result<Option<user::Model>, ServiceError> {
        self.table.update(id, patch).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        self.table.delete(id).await
    }
}
