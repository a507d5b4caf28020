//! Catalog storage for the folio book service.
//!
//! One [`Catalog`] contract, two interchangeable backends:
//! [`MemoryCatalog`] (in-process, behind a store-wide lock) and
//! [`SqliteCatalog`] (sqlx connection pool). The shared
//! filter/sort/paginate routine lives in [`pipeline`] and consumes the
//! contract's full-scan `list()` regardless of backend.

pub mod catalog;
pub mod memory;
pub mod models;
pub mod pipeline;
pub mod sqlite;

pub use catalog::Catalog;
pub use memory::MemoryCatalog;
pub use sqlite::SqliteCatalog;

use sqlx::sqlite::SqlitePoolOptions;

pub type DbPool = sqlx::SqlitePool;

/// Create a sqlite connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Apply embedded migrations (the `books` table schema).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
