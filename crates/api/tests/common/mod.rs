#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::{ServerConfig, StoreBackend};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_store::models::book::BookDraft;
use folio_store::{Catalog, MemoryCatalog};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: "sqlite::memory:".to_string(),
        verbose_errors: false,
    }
}

/// Build the full application router over a fresh in-memory catalog.
///
/// Returns the catalog handle alongside the router so tests can seed and
/// inspect the store directly. The router carries the same middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) that production
/// uses.
pub fn build_test_app() -> (Router, Arc<MemoryCatalog>) {
    let catalog = Arc::new(MemoryCatalog::new());
    let config = test_config();
    let state = AppState {
        catalog: Arc::clone(&catalog) as Arc<dyn Catalog>,
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), catalog)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: &serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Fetch the list endpoint and return `pagination.total_items`.
pub async fn total_items(app: &Router) -> i64 {
    let response = get(app, "/books").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["pagination"]["total_items"]
        .as_i64()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

fn seed_draft(
    title: &str,
    author: &str,
    isbn: &str,
    year: i32,
    category: Option<&str>,
    available: i64,
) -> BookDraft {
    BookDraft {
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        isbn: Some(isbn.to_string()),
        published_year: Some(year),
        category: category.map(str::to_string),
        copies_total: Some(2),
        copies_available: Some(available),
    }
}

/// Seed the five-book scenario set: two fiction, two technology, one book
/// with no copies available.
pub async fn seed_books(catalog: &MemoryCatalog) {
    let drafts = [
        seed_draft("The Hobbit", "J.R.R. Tolkien", "978-0-1", 1937, Some("Fiction"), 2),
        seed_draft("Dune", "Frank Herbert", "978-0-2", 1965, Some("Fiction"), 1),
        seed_draft(
            "The Rust Programming Language",
            "Steve Klabnik",
            "978-0-3",
            2019,
            Some("Technology"),
            2,
        ),
        seed_draft("Clean Code", "Robert C. Martin", "978-0-4", 2008, Some("Technology"), 1),
        seed_draft("Meditations", "Marcus Aurelius", "978-0-5", 180, None, 0),
    ];
    for draft in &drafts {
        catalog.create(draft).await.expect("seed book");
    }
}
