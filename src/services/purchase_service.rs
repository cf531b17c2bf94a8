use crate::dto::{ProductResponse, PurchaseRequest, PurchaseResponse, UserResponse};
use crate::entities::purchase;
use crate::errors::ServiceError;
use crate::repositories::{PurchaseRecord, PurchaseRepository};
use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait PurchaseService: Send + Sync {
    async fn create_purchase(
        &self,
        request: PurchaseRequest,
    ) -> Result<Option<PurchaseResponse>, ServiceError>;
    async fn get_all_purchases(&self) -> Result<Vec<PurchaseResponse>, ServiceError>;
    async fn get_purchase_by_id(
        &self,
        id: i32,
    ) -> Result<Option<PurchaseResponse>, ServiceError>;
    async fn update_purchase(
        &self,
        id: i32,
        request: PurchaseRequest,
    ) -> Result<Option<PurchaseResponse>, ServiceError>;
    async fn delete_purchase(&self, id: i32) -> Result<Option<PurchaseResponse>, ServiceError>;
}

fn purchase_response(record: PurchaseRecord) -> PurchaseResponse {
    let PurchaseRecord {
        purchase,
        product,
        user,
    } = record;
    let (user, product): (UserResponse, ProductResponse) = match (user, product) {
        (Some(user), Some(product)) => (user.into(), product.into()),
        _ => Default::default(),
    };

    PurchaseResponse {
        id: purchase.id,
        purchase_date: purchase.purchase_date,
        user_id: purchase.user_id,
        product_id: purchase.product_id,
        user,
        product,
    }
}

fn purchase_row(request: PurchaseRequest) -> purchase::ActiveModel {
    purchase::ActiveModel {
        purchase_date: Set(request.purchase_date),
        user_id: Set(request.user_id),
        product_id: Set(request.product_id),
        ..Default::default()
    }
}

pub struct PurchaseServiceImpl {
    repository: Arc<dyn PurchaseRepository>,
}

impl PurchaseServiceImpl {
    pub fn new(repository: Arc<dyn PurchaseRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PurchaseService for PurchaseServiceImpl {
    #[instrument(skip(self))]
    async fn create_purchase(
        &self,
        request: PurchaseRequest,
    ) -> Result<Option<PurchaseResponse>, ServiceError> {
        let created = self.repository.insert(purchase_row(request)).await?;
        Ok(created.map(purchase_response))
    }

    async fn get_all_purchases(&self) -> Result<Vec<PurchaseResponse>, ServiceError> {
        let records = self.repository.select_all().await?;
        Ok(records.into_iter().map(purchase_response).collect())
    }

    async fn get_purchase_by_id(
        &self,
        id: i32,
    ) -> Result<Option<PurchaseResponse>, ServiceError> {
        Ok(self
            .repository
            .select_by_id(id)
            .await?
            .map(purchase_response))
    }

    #[instrument(skip(self))]
    async fn update_purchase(
        &self,
        id: i32,
        request: PurchaseRequest,
    ) -> Result<Option<PurchaseResponse>, ServiceError> {
        let updated = self
            .repository
            .update_by_id(id, purchase_row(request))
            .await?;
        Ok(updated.map(purchase_response))
    }

    #[instrument(skip(self))]
    async fn delete_purchase(&self, id: i32) -> Result<Option<PurchaseResponse>, ServiceError> {
        Ok(self
            .repository
            .delete_by_id(id)
            .await?
            .map(purchase_response))
    }
}
