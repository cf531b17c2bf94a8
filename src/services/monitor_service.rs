use crate::dto::{CategoryResponse, MonitorRequest, MonitorResponse, ProductResponse};
use crate::entities::monitor;
use crate::errors::ServiceError;
use crate::repositories::{MonitorRecord, MonitorRepository};
use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait MonitorService: Send + Sync {
    async fn create_monitor(
        &self,
        request: MonitorRequest,
    ) -> Result<Option<MonitorResponse>, ServiceError>;
    async fn get_all_monitors(&self) -> Result<Vec<MonitorResponse>, ServiceError>;
    async fn get_monitor_by_id(&self, id: i32) -> Result<Option<MonitorResponse>, ServiceError>;
    async fn update_monitor(
        &self,
        id: i32,
        request: MonitorRequest,
    ) -> Result<Option<MonitorResponse>, ServiceError>;
    async fn delete_monitor(&self, id: i32) -> Result<Option<MonitorResponse>, ServiceError>;
}

fn monitor_response(record: MonitorRecord) -> MonitorResponse {
    let MonitorRecord {
        monitor,
        product,
        category,
    } = record;
    let (product, category): (ProductResponse, CategoryResponse) = match (product, category) {
        (Some(product), Some(category)) => (product.into(), category.into()),
        _ => Default::default(),
    };

    MonitorResponse {
        id: monitor.id,
        brand: monitor.brand,
        size: monitor.size,
        release_year: monitor.release_year,
        product_id: monitor.product_id,
        category_id: monitor.category_id,
        product,
        category,
    }
}

fn monitor_row(request: MonitorRequest) -> monitor::ActiveModel {
    monitor::ActiveModel {
        brand: Set(request.brand),
        size: Set(request.size),
        release_year: Set(request.release_year),
        product_id: Set(request.product_id),
        category_id: Set(request.category_id),
        ..Default::default()
    }
}

pub struct MonitorServiceImpl {
    repository: Arc<dyn MonitorRepository>,
}

impl MonitorServiceImpl {
    pub fn new(repository: Arc<dyn MonitorRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MonitorService for MonitorServiceImpl {
    #[instrument(skip(self))]
    async fn create_monitor(
        &self,
        request: MonitorRequest,
    ) -> Result<Option<MonitorResponse>, ServiceError> {
        let created = self.repository.insert(monitor_row(request)).await?;
        Ok(created.map(monitor_response))
    }

    async fn get_all_monitors(&self) -> Result<Vec<MonitorResponse>, ServiceError> {
        let records = self.repository.select_all().await?;
        Ok(records.into_iter().map(monitor_response).collect())
    }

    async fn get_monitor_by_id(&self, id: i32) -> Result<Option<MonitorResponse>, ServiceError> {
        Ok(self.repository.select_by_id(id).await?.map(monitor_response))
    }

    #[instrument(skip(self))]
    async fn update_monitor(
        &self,
        id: i32,
        request: MonitorRequest,
    ) -> Result<Option<MonitorResponse>, ServiceError> {
        let updated = self
            .repository
            .update_by_id(id, monitor_row(request))
            .await?;
        Ok(updated.map(monitor_response))
    }

    #[instrument(skip(self))]
    async fn delete_monitor(&self, id: i32) -> Result<Option<MonitorResponse>, ServiceError> {
        Ok(self.repository.delete_by_id(id).await?.map(monitor_response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::category;
    use crate::repositories::monitor_repository::MockMonitorRepository;

    #[tokio::test]
    async fn monitor_without_product_gets_empty_relations() {
        let mut repo = MockMonitorRepository::new();
        repo.expect_select_by_id().returning(|id| {
            Ok(Some(MonitorRecord {
                monitor: monitor::Model {
                    id,
                    brand: "Sony".into(),
                    size: 15,
                    release_year: 2017,
                    product_id: 7,
                    category_id: 2,
                },
                product: None,
                category: Some(category::Model {
                    id: 2,
                    name: "Screens".into(),
                    description: "Monitors".into(),
                }),
            }))
        });
        let service = MonitorServiceImpl::new(Arc::new(repo));

        let response = service.get_monitor_by_id(1).await.unwrap().unwrap();
        assert_eq!(response.brand, "Sony");
        assert_eq!(response.product_id, 7);
        assert_eq!(response.category_id, 2);
        assert_eq!(response.category, CategoryResponse::default());
        assert_eq!(response.product, ProductResponse::default());
    }
}
