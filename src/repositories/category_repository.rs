use super::CrudTable;
use crate::entities::category;
use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn select_all(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn select_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError>;
    async fn insert(
        &self,
        row: category::ActiveModel,
    ) -> Result<Option<category::Model>, ServiceError>;
    async fn update_by_id(
        &self,
        id: i32,
        patch: category::ActiveModel,
    ) -> Result<Option<category::Model>, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmCategoryRepository {
    table: CrudTable<category::Entity>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            table: CrudTable::new(db, "category"),
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn select_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.table.all().await
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        self.table.by_id(id).await
    }

    async fn insert(
        &self,
        row: category::ActiveModel,
    ) -> Result<Option<category::Model>, ServiceError> {
        self.table.insert(row).await.map(Some)
    }

    async fn update_by_id(
        &self,
        id: i32,
        patch: category::ActiveModel,
    ) -> Result<Option<category::Model>, ServiceError> {
        self.table.update(id, patch).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        self.table.delete(id).await
    }
}
