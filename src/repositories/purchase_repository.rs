use super::{CrudTable, Repository};
use crate::entities::{product, purchase, user};
use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, LoaderTrait};
use std::sync::Arc;

/// A purchase row together with whatever user and product rows it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub purchase: purchase::Model,
    pub product: Option<product::Model>,
    pub user: Option<user::Model>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn select_all(&self) -> Result<Vec<PurchaseRecord>, ServiceError>;
    async fn select_by_id(&self, id: i32) -> Result<Option<PurchaseRecord>, ServiceError>;
    async fn insert(
        &self,
        row: purchase::ActiveModel,
    ) -> Result<Option<PurchaseRecord>, ServiceError>;
    async fn update_by_id(
        &self,
        id: i32,
        patch: purchase::ActiveModel,
    ) -> Result<Option<PurchaseRecord>, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<Option<PurchaseRecord>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmPurchaseRepository {
    table: CrudTable<purchase::Entity>,
}

impl SeaOrmPurchaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            table: CrudTable::new(db, "purchase"),
        }
    }

    async fn attach(
        &self,
        purchases: Vec<purchase::Model>,
    ) -> Result<Vec<PurchaseRecord>, ServiceError> {
        if purchases.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.table.get_db();
        let products = purchases.load_one(product::Entity, db).await?;
        let users = purchases.load_one(user::Entity, db).await?;

        Ok(purchases
            .into_iter()
            .zip(products)
            .zip(users)
            .map(|((purchase, product), user)| PurchaseRecord {
                purchase,
                product,
                user,
            })
            .collect())
    }

    async fn attach_one(
        &self,
        purchase: Option<purchase::Model>,
    ) -> Result<Option<PurchaseRecord>, ServiceError> {
        match purchase {
            Some(purchase) => Ok(self.attach(vec![purchase]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PurchaseRepository for SeaOrmPurchaseRepository {
    async fn select_all(&self) -> Result<Vec<PurchaseRecord>, ServiceError> {
        let purchases = self.table.all().await?;
        self.attach(purchases).await
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<PurchaseRecord>, ServiceError> {
        let purchase = self.table.by_id(id).await?;
        self.attach_one(purchase).await
    }

    async fn insert(
        &self,
        row: purchase::ActiveModel,
    ) -> Result<Option<PurchaseRecord>, ServiceError> {
        let inserted = self.table.insert(row).await?;
        self.select_by_id(inserted.id).await
    }

    async fn update_by_id(
        &self,
        id: i32,
        patch: purchase::ActiveModel,
    ) -> Result<Option<PurchaseRecord>, ServiceError> {
        let updated = self.table.update(id, patch).await?;
        self.attach_one(updated).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<PurchaseRecord>, ServiceError> {
        // Relations must be read before the row goes away.
        let Some(snapshot) = self.select_by_id(id).await? else {
            return Ok(None);
        };
        self.table.delete(id).await?;
        Ok(Some(snapshot))
    }
}

