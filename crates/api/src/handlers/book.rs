//! Handlers for the `/books` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CatalogError;
use folio_core::query::Page;
use folio_core::types::DbId;
use folio_store::models::book::{Book, BookDraft};
use folio_store::pipeline;

use crate::error::AppResult;
use crate::query::ListBooksParams;
use crate::state::AppState;

/// GET /books
///
/// Parameter validation happens before the store is consulted, so an
/// invalid `sort_by`/`order` never triggers a scan.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> AppResult<Json<Page<Book>>> {
    let query = params.into_query()?;
    let records = state.catalog.list().await?;
    Ok(Json(pipeline::run(records, &query)))
}

/// POST /books
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Book>)> {
    let book = state.catalog.create(&draft).await?;
    let location = format!("/books/{}", book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = state
        .catalog
        .get(id)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    Ok(Json(book))
}

/// PUT /books/{id} -- full replace of all mutable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(draft): Json<BookDraft>,
) -> AppResult<Json<Book>> {
    let book = state
        .catalog
        .update(id, &draft)
        .await?
        .ok_or(CatalogError::NotFound { id })?;
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !state.catalog.delete(id).await? {
        return Err(CatalogError::NotFound { id }.into());
    }
    Ok(StatusCode::NO_CONTENT)
}
