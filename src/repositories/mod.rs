//! Persistence gateways: one trait plus sea-orm implementation per table.
//!
//! The five operations every gateway exposes share a single generic
//! implementation, [`CrudTable`]. Gateways for composite entities add
//! relation loading on top of it.

use crate::errors::ServiceError;
use metrics::counter;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use std::{marker::PhantomData, sync::Arc};

pub mod category_repository;
pub mod game_repository;
pub mod monitor_repository;
pub mod product_repository;
pub mod purchase_repository;
pub mod user_repository;

pub use category_repository::{CategoryRepository, SeaOrmCategoryRepository};
pub use game_repository::{GameRecord, GameRepository, SeaOrmGameRepository};
pub use monitor_repository::{MonitorRecord, MonitorRepository, SeaOrmMonitorRepository};
pub use product_repository::{ProductRepository, SeaOrmProductRepository};
pub use purchase_repository::{PurchaseRecord, PurchaseRepository, SeaOrmPurchaseRepository};
pub use user_repository::{SeaOrmUserRepository, UserRepository};

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

/// Single-table CRUD over an entity keyed by an `i32` primary key.
#[derive(Debug)]
pub struct CrudTable<E> {
    db: Arc<DatabaseConnection>,
    name: &'static str,
    _entity: PhantomData<E>,
}

impl<E> Clone for CrudTable<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            name: self.name,
            _entity: PhantomData,
        }
    }
}

impl<E> Repository for CrudTable<E> {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl<E, A> CrudTable<E>
where
    E: EntityTrait<ActiveModel = A>,
    E::Model: IntoActiveModel<A> + Send + Sync,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: Arc<DatabaseConnection>, name: &'static str) -> Self {
        Self {
            db,
            name,
            _entity: PhantomData,
        }
    }

    fn track(&self, op: &'static str) {
        counter!(format!("webshop.db.{}.{}", self.name, op), 1);
    }

    fn fail(&self, op: &'static str, err: sea_orm::DbErr) -> ServiceError {
        tracing::error!(table = self.name, op, error = %err, "database operation failed");
        counter!(format!("webshop.db.{}.{}.error", self.name, op), 1);
        ServiceError::from_db(err)
    }

    /// Every row, in primary-key order.
    pub async fn all(&self) -> Result<Vec<E::Model>, ServiceError> {
        self.track("select_all");
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select
            .all(self.get_db())
            .await
            .map_err(|e| self.fail("select_all", e))
    }

    pub async fn by_id(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        self.track("select_by_id");
        E::find_by_id(id)
            .one(self.get_db())
            .await
            .map_err(|e| self.fail("select_by_id", e))
    }

    /// Inserts the row and returns it with the storage-assigned id.
    pub async fn insert(&self, row: A) -> Result<E::Model, ServiceError> {
        self.track("insert");
        row.insert(self.get_db())
            .await
            .map_err(|e| self.fail("insert", e))
    }

    /// Overwrites every column that is `Set` in `patch` on the row `id`.
    /// The primary key of the stored row is kept regardless of the patch.
    pub async fn update(&self, id: i32, patch: A) -> Result<Option<E::Model>, ServiceError> {
        self.track("update_by_id");
        let Some(existing) = self.by_id(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        let key_columns: Vec<E::Column> =
            E::PrimaryKey::iter().map(|key| key.into_column()).collect();
        for column in E::Column::iter() {
            if key_columns
                .iter()
                .any(|key| sea_orm::IdenStatic::as_str(key) == sea_orm::IdenStatic::as_str(&column))
            {
                continue;
            }
            if let ActiveValue::Set(value) = patch.get(column) {
                active.set(column, value);
            }
        }

        active
            .update(self.get_db())
            .await
            .map(Some)
            .map_err(|e| self.fail("update_by_id", e))
    }

    /// Removes the row, returning it as it was before deletion.
    pub async fn delete(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        self.track("delete_by_id");
        let Some(existing) = self.by_id(id).await? else {
            return Ok(None);
        };

        E::delete_by_id(id)
            .exec(self.get_db())
            .await
            .map_err(|e| self.fail("delete_by_id", e))?;

        Ok(Some(existing))
    }
}
