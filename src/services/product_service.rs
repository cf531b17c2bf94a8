use crate::dto::{ProductRequest, ProductResponse};
use crate::entities::product;
use crate::errors::ServiceError;
use crate::repositories::ProductRepository;
use async_trait::async_trait;
use sea_orm::Set;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn create_product(
        &self,
        request: ProductRequest,
    ) -> Result<Option<ProductResponse>, ServiceError>;
    async fn get_all_products(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn get_product_by_id(&self, id: i32) -> Result<Option<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        request: ProductRequest,
    ) -> Result<Option<ProductResponse>, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<Option<ProductResponse>, ServiceError>;
}

impl From<product::Model> for ProductResponse {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            description: model.description,
            stock: model.stock,
        }
    }
}

fn product_row(request: ProductRequest) -> product::ActiveModel {
    product::ActiveModel {
        name: Set(request.name),
        price: Set(request.price),
        description: Set(request.description),
        stock: Set(request.stock),
        ..Default::default()
    }
}

pub struct ProductServiceImpl {
    repository: Arc<dyn ProductRepository>,
}

impl ProductServiceImpl {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    #[instrument(skip(self))]
    async fn create_product(
        &self,
        request: ProductRequest,
    ) -> Result<Option<ProductResponse>, ServiceError> {
        let created = self.repository.insert(product_row(request)).await?;
        Ok(created.map(Into::into))
    }

    async fn get_all_products(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let rows = self.repository.select_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_product_by_id(&self, id: i32) -> Result<Option<ProductResponse>, ServiceError> {
        Ok(self.repository.select_by_id(id).await?.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn update_product(
        &self,
        id: i32,
        request: ProductRequest,
    ) -> Result<Option<ProductResponse>, ServiceError> {
        let updated = self
            .repository
            .update_by_id(id, product_row(request))
            .await?;
        Ok(updated.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: i32) -> Result<Option<ProductResponse>, ServiceError> {
        Ok(self.repository.delete_by_id(id).await?.map(Into::into))
    }
}
