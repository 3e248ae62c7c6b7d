use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

pub use error::{Result, StorageError};

/// DDL for the one table this service owns. `IF NOT EXISTS` makes the
/// schema check safe to run on every startup; existing rows are untouched.
const CREATE_WORKOUTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS workouts (
    workout_id     BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    user_id        VARCHAR(255)    NOT NULL,
    distance_meter DOUBLE          NOT NULL DEFAULT 0,
    started_at     DATETIME        NOT NULL DEFAULT '1970-01-01 00:00:00',
    seconds        BIGINT          NOT NULL DEFAULT 0,
    created_at     TIMESTAMP       NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Shared database handle. Wraps a bounded connection pool; each query
/// acquires a connection from the pool and returns it on every exit path.
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Connect eagerly. Connectivity or credential failures surface here,
    /// which makes them startup-fatal for callers that bootstrap with `?`.
    pub async fn new(options: MySqlConnectOptions) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool. Used by tests that connect lazily.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Ensure the `workouts` table exists. Idempotent: re-running against an
    /// existing table is a no-op, not an error. Only additive creation, no
    /// destructive migration.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_WORKOUTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}
