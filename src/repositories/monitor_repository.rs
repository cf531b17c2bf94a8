use super::{CrudTable, Repository};
use crate::entities::{category, monitor, product};
use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, LoaderTrait};
use std::sync::Arc;

/// A monitor row together with whatever product and category rows it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorRecord {
    pub monitor: monitor::Model,
    pub product: Option<product::Model>,
    pub category: Option<category::Model>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MonitorRepository: Send + Sync {
    async fn select_all(&self) -> Result<Vec<MonitorRecord>, ServiceError>;
    async fn select_by_id(&self, id: i32) -> Result<Option<MonitorRecord>, ServiceError>;
    async fn insert(
        &self,
        row: monitor::ActiveModel,
    ) -> Result<Option<MonitorRecord>, ServiceError>;
    async fn update_by_id(
        &self,
        id: i32,
        patch: monitor::ActiveModel,
    ) -> Result<Option<MonitorRecord>, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<Option<MonitorRecord>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmMonitorRepository {
    table: CrudTable<monitor::Entity>,
}

impl SeaOrmMonitorRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            table: CrudTable::new(db, "monitor"),
        }
    }

    async fn attach(
        &self,
        monitors: Vec<monitor::Model>,
    ) -> Result<Vec<MonitorRecord>, ServiceError> {
        if monitors.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.table.get_db();
        let products = monitors.load_one(product::Entity, db).await?;
        let categories = monitors.load_one(category::Entity, db).await?;

        Ok(monitors
            .into_iter()
            .zip(products)
            .zip(categories)
            .map(|((monitor, product), category)| MonitorRecord {
                monitor,
                product,
                category,
            })
            .collect())
    }

    async fn attach_one(
        &self,
        monitor: Option<monitor::Model>,
    ) -> Result<Option<MonitorRecord>, ServiceError> {
        match monitor {
            Some(monitor) => Ok(self.attach(vec![monitor]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl MonitorRepository for SeaOrmMonitorRepository {
    async fn select_all(&self) -> Result<Vec<MonitorRecord>, ServiceError> {
        let monitors = self.table.all().await?;
        self.attach(monitors).await
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<MonitorRecord>, ServiceError> {
        let monitor = self.table.by_id(id).await?;
        self.attach_one(monitor).await
    }

    async fn insert(
        &self,
        row: monitor::ActiveModel,
    ) -> Result<Option<MonitorRecord>, ServiceError> {
        let inserted = self.table.insert(row).await?;
        self.select_by_id(inserted.id).await
    }

    async fn update_by_id(
        &self,
        id: i32,
        patch: monitor::ActiveModel,
    ) -> Result<Option<MonitorRecord>, ServiceError> {
        let updated = self.table.update(id, patch).await?;
        self.attach_one(updated).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<MonitorRecord>, ServiceError> {
        // Relations must be read before the row goes away.
        let Some(snapshot) = self.select_by_id(id).await? else {
            return Ok(None);
        };
        self.table.delete(id).await?;
        Ok(Some(snapshot))
    }
}

