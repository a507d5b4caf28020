//! The Catalog Store contract.

use async_trait::async_trait;
use folio_core::error::CatalogError;
use folio_core::types::DbId;

use crate::models::book::{Book, BookDraft};

/// CRUD contract owned by every storage backend.
///
/// The backing medium (in-process collection vs. on-disk table) is an
/// implementation detail behind this trait; handlers hold it as
/// `Arc<dyn Catalog>`. Absent records surface as `Ok(None)` / `Ok(false)`
/// and are mapped to `NotFound` at the HTTP boundary.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Validate and insert a draft, returning the full stored record.
    ///
    /// Assigns a monotonic `id` (never reused after deletion), sets both
    /// timestamps, defaults `copies_available` to `copies_total` (itself
    /// defaulting to 1), and rejects an isbn already present in the store
    /// with [`CatalogError::DuplicateKey`] without mutating anything.
    async fn create(&self, draft: &BookDraft) -> Result<Book, CatalogError>;

    /// Fetch a record by id.
    async fn get(&self, id: DbId) -> Result<Option<Book>, CatalogError>;

    /// Full scan in storage order. Sorting is the query pipeline's job.
    async fn list(&self) -> Result<Vec<Book>, CatalogError>;

    /// Replace all mutable fields of an existing record.
    ///
    /// Re-validates the draft, preserves `id` and `created_at`, refreshes
    /// `updated_at`, and rejects an isbn that collides with a *different*
    /// record. Returns `None` when `id` is unknown.
    async fn update(&self, id: DbId, draft: &BookDraft) -> Result<Option<Book>, CatalogError>;

    /// Remove a record permanently. Returns `false` when `id` is unknown.
    async fn delete(&self, id: DbId) -> Result<bool, CatalogError>;

    /// Verify the backing medium is reachable.
    async fn health_check(&self) -> Result<(), CatalogError>;
}
