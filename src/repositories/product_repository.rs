use super::CrudTable;
use crate::entities::product;
use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn select_all(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn select_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
    async fn insert(
        &self,
        row: product::ActiveModel,
    ) -> Result<Option<product::Model>, ServiceError>;
    async fn update_by_id(
        &self,
        id: i32,
        patch: product::ActiveModel,
    ) -> Result<Option<product::Model>, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmProductRepository {
    table: CrudTable<product::Entity>,
}

impl SeaOrmProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            table: CrudTable::new(db, "product"),
        }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn select_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        self.table.all().await
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        self.table.by_id(id).await
    }

    async fn insert(
        &self,
        row: product::ActiveModel,
    ) -> Result<Option<product::Model>, ServiceError> {
        self.table.insert(row).await.map(Some)
    }

    async fn update_by_id(
        &self,
        id: i32,
        patch: product::ActiveModel,
    ) -> Result<Option<product::Model>, ServiceError> {
        self.table.update(id, patch).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        self.table.delete(id).await
    }
}
