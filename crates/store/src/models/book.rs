//! Book entity model and draft DTO.

use folio_core::error::{CatalogError, FieldError};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog record, as stored and as returned on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: Option<i32>,
    pub category: Option<String>,
    pub copies_available: i64,
    pub copies_total: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Client-supplied book fields, used by both create (POST) and full replace
/// (PUT). Required fields are optional here so the store can report missing
/// input as structured validation errors instead of a deserialization
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub category: Option<String>,
    pub copies_total: Option<i64>,
    pub copies_available: Option<i64>,
}

impl BookDraft {
    /// Validate required fields, returning a borrowed view with defaults
    /// resolved. Collects every field failure rather than stopping at the
    /// first.
    pub fn validate(&self) -> Result<ValidDraft<'_>, CatalogError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("isbn", &self.isbn),
        ] {
            if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
                errors.push(FieldError::required(field));
            }
        }

        let copies_total = self.copies_total.unwrap_or(1);
        if copies_total < 0 {
            errors.push(FieldError::new("copies_total", "copies_total must be >= 0"));
        }

        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        Ok(ValidDraft {
            // Presence was just checked; reading back through as_deref keeps
            // this panic-free.
            title: self.title.as_deref().unwrap_or_default(),
            author: self.author.as_deref().unwrap_or_default(),
            isbn: self.isbn.as_deref().unwrap_or_default(),
            published_year: self.published_year,
            category: self.category.as_deref(),
            copies_total,
            copies_available: self.copies_available,
        })
    }
}

/// A validated draft with `copies_total` defaulted (1 when omitted).
///
/// `copies_available` stays unresolved because its fallback differs between
/// create (defaults to `copies_total`) and update (carries over the existing
/// record's value). Both paths clamp into `[0, copies_total]`.
#[derive(Debug, Clone, Copy)]
pub struct ValidDraft<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub isbn: &'a str,
    pub published_year: Option<i32>,
    pub category: Option<&'a str>,
    pub copies_total: i64,
    copies_available: Option<i64>,
}

impl ValidDraft<'_> {
    /// `copies_available` for a newly created record.
    pub fn copies_available_for_create(&self) -> i64 {
        self.copies_available
            .unwrap_or(self.copies_total)
            .clamp(0, self.copies_total)
    }

    /// `copies_available` when replacing `existing`. An omitted value
    /// carries the existing count forward, re-clamped against the (possibly
    /// changed) `copies_total`.
    pub fn copies_available_for_update(&self, existing: &Book) -> i64 {
        self.copies_available
            .unwrap_or(existing.copies_available)
            .clamp(0, self.copies_total)
    }
}
