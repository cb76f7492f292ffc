//! Database models and operations for coursekit

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod models;
pub mod queries;

// Re-export convenience types
pub use queries::{ContentFilter, ContentQueries, CourseQueries};

use coursekit_core::{Config, Error, Result};
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;
use std::time::Duration;

/// Database connection pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection cannot be established.
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .acquire_timeout(Duration::from_secs(config.database.connect_timeout))
            .idle_timeout(Duration::from_secs(config.database.idle_timeout))
            .connect(&config.database.url)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if migrations fail to run.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Migration failed: {e}")))?;

        Ok(())
    }

    /// Health check
    ///
    /// # Errors
    ///
    /// Returns an error if the health check fails.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Health check failed: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use coursekit_core::Config;

    #[tokio::test]
    async fn test_database_new_invalid_url() {
        let mut config = Config::default();
        config.database.url = "invalid://url".to_string();

        let result = Database::new(&config).await;
        assert!(result.is_err());

        if let Err(Error::Database(msg)) = result {
            assert!(!msg.is_empty());
        } else {
            panic!("Expected Database error");
        }
    }

    #[tokio::test]
    async fn test_database_health_check_fail() {
        let pool = sqlx::PgPool::connect_lazy("postgresql://invalid:5432/nonexistent")
            .expect("Failed to create test pool");
        let db = Database { pool };

        let result = db.health_check().await;
        assert!(result.is_err());

        if let Err(Error::Database(msg)) = result {
            assert!(msg.contains("Health check failed"));
        } else {
            panic!("Expected Database error");
        }
    }

    #[test]
    fn test_database_clone_and_debug() {
        fn assert_clone<T: Clone>() {}
        fn assert_debug<T: std::fmt::Debug>() {}

        assert_clone::<Database>();
        assert_debug::<Database>();
    }

    #[test]
    fn test_pool_configuration_values() {
        let config = Config::default();

        assert!(config.database.max_connections >= config.database.min_connections);
        assert!(config.database.connect_timeout > 0);
    }
}
