//! In-memory catalog backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::error::CatalogError;
use folio_core::types::DbId;
use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::models::book::{Book, BookDraft};

struct Inner {
    books: BTreeMap<DbId, Book>,
    /// Next id to assign. Deliberately a dedicated counter rather than
    /// `len() + 1`, so ids are never reused after a deletion.
    next_id: DbId,
}

/// Catalog backed by an in-process map behind one store-wide lock.
///
/// Mutating operations hold the write guard across their check-then-write
/// sequence, which closes the duplicate-isbn race without changing the
/// contract.
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                books: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn create(&self, draft: &BookDraft) -> Result<Book, CatalogError> {
        let valid = draft.validate()?;
        let mut inner = self.inner.write().await;

        if inner.books.values().any(|b| b.isbn == valid.isbn) {
            return Err(CatalogError::DuplicateKey {
                isbn: valid.isbn.to_string(),
            });
        }

        let now = Utc::now();
        let id = inner.next_id;
        inner.next_id += 1;

        let book = Book {
            id,
            title: valid.title.to_string(),
            author: valid.author.to_string(),
            isbn: valid.isbn.to_string(),
            published_year: valid.published_year,
            category: valid.category.map(str::to_string),
            copies_available: valid.copies_available_for_create(),
            copies_total: valid.copies_total,
            created_at: now,
            updated_at: now,
        };
        inner.books.insert(id, book.clone());
        tracing::debug!(id, "Created book in memory catalog");
        Ok(book)
    }

    async fn get(&self, id: DbId) -> Result<Option<Book>, CatalogError> {
        Ok(self.inner.read().await.books.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Book>, CatalogError> {
        // Ids are monotonic, so map order is insertion (storage) order.
        Ok(self.inner.read().await.books.values().cloned().collect())
    }

    async fn update(&self, id: DbId, draft: &BookDraft) -> Result<Option<Book>, CatalogError> {
        let valid = draft.validate()?;
        let mut inner = self.inner.write().await;

        let Some(existing) = inner.books.get(&id).cloned() else {
            return Ok(None);
        };

        if inner
            .books
            .values()
            .any(|b| b.id != id && b.isbn == valid.isbn)
        {
            return Err(CatalogError::DuplicateKey {
                isbn: valid.isbn.to_string(),
            });
        }

        let updated = Book {
            id: existing.id,
            title: valid.title.to_string(),
            author: valid.author.to_string(),
            isbn: valid.isbn.to_string(),
            published_year: valid.published_year,
            category: valid.category.map(str::to_string),
            copies_available: valid.copies_available_for_update(&existing),
            copies_total: valid.copies_total,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        inner.books.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CatalogError> {
        Ok(self.inner.write().await.books.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), CatalogError> {
        Ok(())
    }
}
