//! Contract tests for the in-memory catalog backend.

use assert_matches::assert_matches;
use folio_core::error::CatalogError;
use folio_store::models::book::BookDraft;
use folio_store::{Catalog, MemoryCatalog};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft(title: &str, isbn: &str) -> BookDraft {
    BookDraft {
        title: Some(title.to_string()),
        author: Some("Test Author".to_string()),
        isbn: Some(isbn.to_string()),
        ..BookDraft::default()
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_id_timestamps_and_copy_defaults() {
    let catalog = MemoryCatalog::new();
    let book = catalog.create(&draft("Dune", "111")).await.unwrap();

    assert_eq!(book.id, 1);
    assert_eq!(book.copies_total, 1);
    assert_eq!(book.copies_available, 1);
    assert_eq!(book.created_at, book.updated_at);
}

#[tokio::test]
async fn create_with_missing_required_fields_is_rejected() {
    let catalog = MemoryCatalog::new();
    let err = catalog.create(&BookDraft::default()).await.unwrap_err();
    assert_matches!(err, CatalogError::Validation(_));
    assert!(catalog.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_isbn_is_rejected_without_mutating_the_store() {
    let catalog = MemoryCatalog::new();
    catalog.create(&draft("Dune", "111")).await.unwrap();

    let err = catalog.create(&draft("Other", "111")).await.unwrap_err();
    assert_matches!(err, CatalogError::DuplicateKey { ref isbn } if isbn == "111");
    assert_eq!(catalog.list().await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ids_are_never_reused_after_deletion() {
    let catalog = MemoryCatalog::new();
    catalog.create(&draft("A", "1")).await.unwrap();
    let b = catalog.create(&draft("B", "2")).await.unwrap();
    assert!(catalog.delete(b.id).await.unwrap());

    let c = catalog.create(&draft("C", "3")).await.unwrap();
    assert!(c.id > b.id, "id {} must not reuse deleted id {}", c.id, b.id);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_preserves_id_and_created_at_and_refreshes_updated_at() {
    let catalog = MemoryCatalog::new();
    let book = catalog.create(&draft("Dune", "111")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = catalog
        .update(book.id, &draft("Dune Messiah", "111"))
        .await
        .unwrap()
        .expect("record exists");

    assert_eq!(updated.id, book.id);
    assert_eq!(updated.created_at, book.created_at);
    assert!(updated.updated_at > book.updated_at);
    assert_eq!(updated.title, "Dune Messiah");
}

#[tokio::test]
async fn update_rejects_isbn_of_a_different_record() {
    let catalog = MemoryCatalog::new();
    catalog.create(&draft("A", "1")).await.unwrap();
    let b = catalog.create(&draft("B", "2")).await.unwrap();

    let err = catalog.update(b.id, &draft("B", "1")).await.unwrap_err();
    assert_matches!(err, CatalogError::DuplicateKey { ref isbn } if isbn == "1");

    // Keeping its own isbn is not a collision.
    let kept = catalog.update(b.id, &draft("B2", "2")).await.unwrap();
    assert_eq!(kept.unwrap().title, "B2");
}

#[tokio::test]
async fn update_of_unknown_id_returns_none() {
    let catalog = MemoryCatalog::new();
    assert!(catalog.update(99, &draft("X", "9")).await.unwrap().is_none());
}

#[tokio::test]
async fn omitted_copies_available_carries_over_clamped_to_new_total() {
    let catalog = MemoryCatalog::new();
    let mut d = draft("Dune", "111");
    d.copies_total = Some(5);
    d.copies_available = Some(4);
    let book = catalog.create(&d).await.unwrap();
    assert_eq!(book.copies_available, 4);

    // Shrink the total without supplying an available count: the carried
    // value 4 is clamped to the new total.
    let mut d = draft("Dune", "111");
    d.copies_total = Some(2);
    let updated = catalog.update(book.id, &d).await.unwrap().unwrap();
    assert_eq!(updated.copies_total, 2);
    assert_eq!(updated.copies_available, 2);
}

// ---------------------------------------------------------------------------
// Get / list / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_unknown_id_returns_none() {
    let catalog = MemoryCatalog::new();
    assert!(catalog.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn list_returns_records_in_insertion_order() {
    let catalog = MemoryCatalog::new();
    catalog.create(&draft("Zebra", "1")).await.unwrap();
    catalog.create(&draft("Aardvark", "2")).await.unwrap();

    let titles: Vec<_> = catalog
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["Zebra", "Aardvark"]);
}

#[tokio::test]
async fn delete_of_unknown_id_leaves_the_store_unchanged() {
    let catalog = MemoryCatalog::new();
    catalog.create(&draft("Dune", "111")).await.unwrap();

    assert!(!catalog.delete(99).await.unwrap());
    assert_eq!(catalog.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_the_record_permanently() {
    let catalog = MemoryCatalog::new();
    let book = catalog.create(&draft("Dune", "111")).await.unwrap();

    assert!(catalog.delete(book.id).await.unwrap());
    assert!(catalog.get(book.id).await.unwrap().is_none());
    assert!(!catalog.delete(book.id).await.unwrap());
}
