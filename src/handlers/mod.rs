pub mod categories;
pub mod common;
pub mod games;
pub mod health;
pub mod monitors;
pub mod products;
pub mod purchases;
pub mod users;

use crate::repositories::{
    SeaOrmCategoryRepository, SeaOrmGameRepository, SeaOrmMonitorRepository,
    SeaOrmProductRepository, SeaOrmPurchaseRepository, SeaOrmUserRepository,
};
use crate::services::{
    CategoryService, CategoryServiceImpl, GameService, GameServiceImpl, MonitorService,
    MonitorServiceImpl, ProductService, ProductServiceImpl, PurchaseService, PurchaseServiceImpl,
    UserService, UserServiceImpl,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<dyn CategoryService>,
    pub products: Arc<dyn ProductService>,
    pub games: Arc<dyn GameService>,
    pub monitors: Arc<dyn MonitorService>,
    pub purchases: Arc<dyn PurchaseService>,
    pub users: Arc<dyn UserService>,
}

impl AppServices {
    /// Wires every service to its sea-orm gateway on the shared pool.
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self {
            categories: Arc::new(CategoryServiceImpl::new(Arc::new(
                SeaOrmCategoryRepository::new(db_pool.clone()),
            ))),
            products: Arc::new(ProductServiceImpl::new(Arc::new(
                SeaOrmProductRepository::new(db_pool.clone()),
            ))),
            games: Arc::new(GameServiceImpl::new(Arc::new(SeaOrmGameRepository::new(
                db_pool.clone(),
            )))),
            monitors: Arc::new(MonitorServiceImpl::new(Arc::new(
                SeaOrmMonitorRepository::new(db_pool.clone()),
            ))),
            purchases: Arc::new(PurchaseServiceImpl::new(Arc::new(
                SeaOrmPurchaseRepository::new(db_pool.clone()),
            ))),
            users: Arc::new(UserServiceImpl::new(Arc::new(SeaOrmUserRepository::new(
                db_pool,
            )))),
        }
    }
}
