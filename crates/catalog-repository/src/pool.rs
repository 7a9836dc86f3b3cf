//! Database connection pool management.

use async_trait::async_trait;
use catalog_config::DatabaseConfig;
use catalog_core::{CatalogError, CatalogResult};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

/// Liveness probe for the relational store, used by the readiness endpoint.
#[async_trait]
pub trait DatabaseHealthCheck: Send + Sync {
    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> CatalogResult<()>;
}

/// Interface for database pool operations.
#[async_trait]
pub trait DatabasePoolInterface: DatabaseHealthCheck {
    /// Returns a reference to the underlying MySQL pool.
    fn inner(&self) -> &MySqlPool;

    /// Runs database migrations.
    async fn run_migrations(&self) -> CatalogResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> CatalogResult<Self> {
        info!("Connecting to MySQL database...");

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                CatalogError::Database(format!("Failed to connect: {e}"))
            })?;

        info!("MySQL connection pool established");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DatabaseHealthCheck for DatabasePool {
    async fn health_check(&self) -> CatalogResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn run_migrations(&self) -> CatalogResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| CatalogError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> CatalogResult<std::sync::Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(std::sync::Arc::new(pool))
}
