use crate::config::AppConfig;
use crate::entities::{category, game, monitor, product, purchase, user};
use crate::errors::ServiceError;
use chrono::NaiveDate;
use metrics::{counter, gauge};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    Set, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Configuration for database connection
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout duration
    pub idle_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            acquire_timeout: Duration::from_secs(8),
        }
    }
}

impl From<&AppConfig> for DbConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.database_url.clone(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.db_idle_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
        }
    }
}

/// Establishes a connection pool to the database with custom configuration
///
/// # Errors
/// Returns a `ServiceError` if the connection cannot be established
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, ServiceError> {
    debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Configuring database connection"
    );

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(false);

    gauge!("webshop.db.max_connections", config.max_connections as f64);

    let db_pool = Database::connect(opt).await.map_err(|e| {
        error!("Database connection failed: {}", e);
        counter!("webshop.db.connection_failures", 1);
        ServiceError::DatabaseError(e)
    })?;

    info!("Database connection pool established");
    Ok(db_pool)
}

/// Establish DB pool using AppConfig tuning
pub async fn establish_connection_from_app_config(cfg: &AppConfig) -> Result<DbPool, ServiceError> {
    let db_cfg: DbConfig = cfg.into();
    establish_connection_with_config(&db_cfg).await
}

/// Applies every pending migration of the embedded migrator.
pub async fn run_migrations(pool: &DbPool) -> Result<(), ServiceError> {
    info!("Running database migrations");
    let start = Instant::now();

    let result = crate::migrator::Migrator::up(pool, None)
        .await
        .map_err(ServiceError::DatabaseError);

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => info!("Database migrations completed in {:?}", elapsed),
        Err(e) => error!("Database migrations failed after {:?}: {}", elapsed, e),
    }

    result
}

/// Checks if the database connection is active
pub async fn check_connection(pool: &DbPool) -> Result<(), ServiceError> {
    let start = Instant::now();
    let result = pool.ping().await.map_err(ServiceError::DatabaseError);

    match &result {
        Ok(_) => {
            gauge!(
                "webshop.db.connection_latency_ms",
                start.elapsed().as_millis() as f64
            );
        }
        Err(e) => {
            error!("Database connection check failed: {}", e);
            counter!("webshop.db.connection_failures", 1);
        }
    }

    result
}

/// Closes the database connection pool
pub async fn close_pool(pool: DbPool) -> Result<(), ServiceError> {
    info!("Closing database connection pool");
    pool.close().await.map_err(ServiceError::DatabaseError)
}

/// Loads the demo catalog into an empty database. Returns `false` when the
/// categories table already has rows and nothing was written.
pub async fn seed_demo_data(pool: &DbPool) -> Result<bool, ServiceError> {
    if category::Entity::find().count(pool).await? > 0 {
        debug!("Skipping demo data, catalog is not empty");
        return Ok(false);
    }

    let txn = pool.begin().await?;

    let categories = [
        ("TestCategory", "TestCategoryDescription"),
        ("TestCategory2", "TestCategoryDescription2"),
    ];
    let mut category_ids = Vec::with_capacity(categories.len());
    for (name, description) in categories {
        let row = category::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        category_ids.push(row.id);
    }

    let products = [
        ("TestProductName", Decimal::new(9995, 2), "TestProductDescription", 22),
        ("TestProductName2", Decimal::new(59995, 2), "TestProductDescription2", 10),
    ];
    let mut product_ids = Vec::with_capacity(products.len());
    for (name, price, description, stock) in products {
        let row = product::ActiveModel {
            name: Set(name.to_string()),
            price: Set(price),
            description: Set(description.to_string()),
            stock: Set(stock),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        product_ids.push(row.id);
    }

    let games = [
        ("TestPublisher", 2017, "English", "RPG"),
        ("TestPublisher2", 2018, "Danish", "Action"),
    ];
    for (idx, (publisher, year, language, genre)) in games.into_iter().enumerate() {
        game::ActiveModel {
            publisher: Set(publisher.to_string()),
            published_year: Set(year),
            language: Set(language.to_string()),
            genre: Set(genre.to_string()),
            product_id: Set(product_ids[idx]),
            category_id: Set(category_ids[idx]),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    monitor::ActiveModel {
        brand: Set("Sony".to_string()),
        size: Set(15),
        release_year: Set(2017),
        product_id: Set(product_ids[0]),
        category_id: Set(category_ids[1]),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let users = [
        ("TestUsername", "TestPassword", "test@example.com", "Admin"),
        ("TestUsername2", "TestPassword2", "test2@example.com", "Client"),
    ];
    let mut user_ids = Vec::with_capacity(users.len());
    for (username, password, email, user_type) in users {
        let row = user::ActiveModel {
            username: Set(username.to_string()),
            password: Set(password.to_string()),
            email: Set(email.to_string()),
            user_type: Set(user_type.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        user_ids.push(row.id);
    }

    let purchase_dates = [
        NaiveDate::from_ymd_opt(2020, 1, 1),
        NaiveDate::from_ymd_opt(2020, 2, 1),
    ];
    for (idx, date) in purchase_dates.into_iter().enumerate() {
        let date = date.ok_or_else(|| ServiceError::InternalError("invalid seed date".into()))?;
        purchase::ActiveModel {
            purchase_date: Set(date),
            user_id: Set(user_ids[idx]),
            product_id: Set(product_ids[idx]),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    info!("Demo catalog data inserted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> DbPool {
        let pool = establish_connection_with_config(&DbConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            ..Default::default()
        })
        .await
        .unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn seed_populates_every_table_once() {
        let pool = memory_pool().await;

        assert!(seed_demo_data(&pool).await.unwrap());
        assert_eq!(category::Entity::find().count(&pool).await.unwrap(), 2);
        assert_eq!(product::Entity::find().count(&pool).await.unwrap(), 2);
        assert_eq!(game::Entity::find().count(&pool).await.unwrap(), 2);
        assert_eq!(monitor::Entity::find().count(&pool).await.unwrap(), 1);
        assert_eq!(user::Entity::find().count(&pool).await.unwrap(), 2);
        assert_eq!(purchase::Entity::find().count(&pool).await.unwrap(), 2);

        assert!(!seed_demo_data(&pool).await.unwrap());
        assert_eq!(category::Entity::find().count(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn connection_check_succeeds_on_live_pool() {
        let pool = memory_pool().await;
        assert!(check_connection(&pool).await.is_ok());
        close_pool(pool).await.unwrap();
    }
}
