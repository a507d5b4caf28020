//! SQLite catalog backend.

use async_trait::async_trait;
use chrono::Utc;
use folio_core::error::CatalogError;
use folio_core::types::DbId;

use crate::catalog::Catalog;
use crate::models::book::{Book, BookDraft};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, isbn, published_year, category, \
    copies_available, copies_total, created_at, updated_at";

/// Catalog backed by a sqlite connection pool.
///
/// The duplicate-isbn pre-check gives a precise error message; the `UNIQUE`
/// constraint on `isbn` backstops it against concurrent writers, with the
/// constraint violation mapped back to [`CatalogError::DuplicateKey`].
pub struct SqliteCatalog {
    pool: DbPool,
}

impl SqliteCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn isbn_taken(&self, isbn: &str, exclude: Option<DbId>) -> Result<bool, CatalogError> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM books WHERE isbn = ?1 AND id != COALESCE(?2, -1)")
                .bind(isbn)
                .bind(exclude)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| classify(e, isbn))?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    async fn create(&self, draft: &BookDraft) -> Result<Book, CatalogError> {
        let valid = draft.validate()?;

        if self.isbn_taken(valid.isbn, None).await? {
            return Err(CatalogError::DuplicateKey {
                isbn: valid.isbn.to_string(),
            });
        }

        let now = Utc::now();
        let query = format!(
            "INSERT INTO books
                (title, author, isbn, published_year, category,
                 copies_available, copies_total, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(valid.title)
            .bind(valid.author)
            .bind(valid.isbn)
            .bind(valid.published_year)
            .bind(valid.category)
            .bind(valid.copies_available_for_create())
            .bind(valid.copies_total)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, valid.isbn))?;

        tracing::debug!(id = book.id, "Created book in sqlite catalog");
        Ok(book)
    }

    async fn get(&self, id: DbId) -> Result<Option<Book>, CatalogError> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = ?1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)
    }

    async fn list(&self) -> Result<Vec<Book>, CatalogError> {
        // Storage (insertion) order; sorting is the query pipeline's job.
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id");
        sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)
    }

    async fn update(&self, id: DbId, draft: &BookDraft) -> Result<Option<Book>, CatalogError> {
        let valid = draft.validate()?;

        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        if self.isbn_taken(valid.isbn, Some(id)).await? {
            return Err(CatalogError::DuplicateKey {
                isbn: valid.isbn.to_string(),
            });
        }

        let query = format!(
            "UPDATE books SET
                title = ?2, author = ?3, isbn = ?4, published_year = ?5,
                category = ?6, copies_available = ?7, copies_total = ?8,
                updated_at = ?9
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(valid.title)
            .bind(valid.author)
            .bind(valid.isbn)
            .bind(valid.published_year)
            .bind(valid.category)
            .bind(valid.copies_available_for_update(&existing))
            .bind(valid.copies_total)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, valid.isbn))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CatalogError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), CatalogError> {
        crate::health_check(&self.pool).await.map_err(storage)
    }
}

/// Classify a sqlx error from a write path: a unique-constraint violation
/// means a concurrent writer won the isbn, anything else is a storage
/// failure.
fn classify(err: sqlx::Error, isbn: &str) -> CatalogError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return CatalogError::DuplicateKey {
                isbn: isbn.to_string(),
            };
        }
    }
    storage(err)
}

fn storage(err: sqlx::Error) -> CatalogError {
    tracing::error!(error = %err, "sqlite catalog error");
    CatalogError::Storage(err.to_string())
}
