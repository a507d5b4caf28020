//! Raw query parameter bag for `GET /books` and its conversion into the
//! typed [`ListQuery`].
//!
//! Conversion happens once per request, before the store is touched, so an
//! invalid `sort_by`/`order`/`available` fails fast with `InvalidParameter`.

use folio_core::error::CatalogError;
use folio_core::query::{BookFilter, ListQuery, SortField, SortOrder, DEFAULT_PAGE_LIMIT};
use serde::Deserialize;

/// Query parameters accepted by the list endpoint, all optional.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksParams {
    pub category: Option<String>,
    pub author: Option<String>,
    /// `"true"` or `"false"`; anything else is rejected.
    pub available: Option<String>,
    /// Defaults to `title`.
    pub sort_by: Option<String>,
    /// Defaults to `asc`.
    pub order: Option<String>,
    /// 1-based, defaults to 1. Values below 1 are clamped.
    pub page: Option<i64>,
    /// Defaults to 20. Values below 1 are clamped.
    pub limit: Option<i64>,
}

impl ListBooksParams {
    pub fn into_query(self) -> Result<ListQuery, CatalogError> {
        let sort_by = match self.sort_by.as_deref() {
            Some(raw) => raw.parse::<SortField>()?,
            None => SortField::default(),
        };
        let order = match self.order.as_deref() {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };

        let available = match self.available.as_deref() {
            None => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                return Err(CatalogError::InvalidParameter(format!(
                    "unsupported available value '{other}' (expected true or false)"
                )))
            }
        };

        Ok(ListQuery {
            filter: BookFilter {
                category: self.category,
                author: self.author,
                available,
            },
            sort_by,
            order,
            page: self.page.unwrap_or(1).max(1),
            limit: self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1),
        })
    }
}
