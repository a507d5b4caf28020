//! Typed query vocabulary for the list endpoint.
//!
//! The HTTP layer parses its raw parameter bag into a [`ListQuery`] exactly
//! once, before any store work happens. Invalid sort state is therefore
//! unrepresentable past the request boundary, which is what gives the query
//! pipeline its fail-fast guarantee.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CatalogError;

/// Default page size when `limit` is omitted.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Sortable book fields. Anything else is rejected as `InvalidParameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    PublishedYear,
    Author,
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "published_year" => Ok(Self::PublishedYear),
            "author" => Ok(Self::Author),
            other => Err(CatalogError::InvalidParameter(format!(
                "unsupported sort_by value '{other}' (expected title, published_year, or author)"
            ))),
        }
    }
}

/// Sort direction. Descending is the exact reverse of ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CatalogError::InvalidParameter(format!(
                "unsupported order value '{other}' (expected asc or desc)"
            ))),
        }
    }
}

/// Filter criteria applied conjunctively (AND) before sorting.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    /// Exact category match, case-insensitive.
    pub category: Option<String>,
    /// Author substring match, case-insensitive.
    pub author: Option<String>,
    /// `true` selects `copies_available > 0`, `false` selects `== 0`.
    pub available: Option<bool>,
}

/// A fully validated list query: filters, sort, and pagination.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub filter: BookFilter,
    pub sort_by: SortField,
    pub order: SortOrder,
    /// 1-based page number, clamped to >= 1.
    pub page: i64,
    /// Page size, clamped to >= 1.
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: BookFilter::default(),
            sort_by: SortField::default(),
            order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Pagination metadata returned alongside every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

impl PageMeta {
    /// Compute metadata for a filtered set of `total_items` records.
    ///
    /// `total_pages` is `ceil(total_items / limit)`; an empty set yields
    /// zero pages. Callers guarantee `limit >= 1` (the boundary clamps it);
    /// the addition saturates so an absurd `limit` cannot overflow.
    pub fn compute(total_items: i64, page: i64, limit: i64) -> Self {
        Self {
            current_page: page,
            total_pages: total_items.saturating_add(limit - 1) / limit,
            total_items,
            items_per_page: limit,
        }
    }
}

/// A bounded slice of the filtered, sorted record set plus its metadata.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Zero-based `[start, end)` slice bounds for `page` within a set of `len`
/// records, clamped so an out-of-range page yields an empty slice rather
/// than an error.
pub fn page_bounds(len: usize, page: i64, limit: i64) -> (usize, usize) {
    let offset = (page - 1).saturating_mul(limit).max(0);
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let end = start.saturating_add(limit).min(len);
    (start, end)
}
