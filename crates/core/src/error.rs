use serde::Serialize;

use crate::types::DbId;

/// A single field-level validation failure.
///
/// Serialized into the `details` array of the error envelope, e.g.
/// `{ "field": "author", "message": "author is required" }`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Standard "field is required" error.
    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("{field} is required and must be non-empty"))
    }
}

/// Domain-level error taxonomy shared by the store and the query pipeline.
///
/// Every variant has a stable wire code (see the API error mapping); all
/// errors propagate unrecovered to the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Missing or malformed required input. Carries per-field details.
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// Unsupported query parameter value (e.g. an unknown `sort_by`).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An isbn collision that would violate store-wide uniqueness.
    #[error("Duplicate isbn: {isbn}")]
    DuplicateKey { isbn: String },

    /// No record with the given id.
    #[error("Book with id {id} not found")]
    NotFound { id: DbId },

    /// Underlying storage medium failure.
    #[error("Storage failure: {0}")]
    Storage(String),
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_joins_field_messages() {
        let err = CatalogError::Validation(vec![
            FieldError::required("title"),
            FieldError::required("author"),
        ]);
        let text = err.to_string();
        assert!(text.contains("title is required"));
        assert!(text.contains("author is required"));
    }

    #[test]
    fn not_found_display_names_the_id() {
        let err = CatalogError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Book with id 42 not found");
    }
}
