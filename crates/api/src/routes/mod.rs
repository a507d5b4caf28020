pub mod book;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /books          list (GET), create (POST)
/// /books/{id}     get (GET), replace (PUT), remove (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/books", book::router())
}
