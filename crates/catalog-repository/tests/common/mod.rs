//! Common test infrastructure for database integration tests.

use catalog_config::DatabaseConfig;
use catalog_repository::{DatabasePool, DatabasePoolInterface};
use std::sync::Arc;

/// Environment variable naming a disposable MySQL database.
pub const TEST_DATABASE_URL_VAR: &str = "CATALOG_TEST_DATABASE_URL";

/// Migrated connection to a throwaway MySQL database.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Connects to `CATALOG_TEST_DATABASE_URL` and runs migrations.
    ///
    /// Returns `None` when the variable is unset so the suite can run
    /// without a database.
    pub async fn from_env() -> Option<Self> {
        let url = std::env::var(TEST_DATABASE_URL_VAR).ok()?;

        let config = DatabaseConfig {
            url,
            min_connections: 1,
            max_connections: 5,
            ..DatabaseConfig::default()
        };

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to connect to test database");
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool: Arc::new(pool),
        })
    }

    /// Returns the pool as the store-facing interface.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        Arc::clone(&self.pool) as Arc<dyn DatabasePoolInterface>
    }
}
