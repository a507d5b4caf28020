//! Shared domain vocabulary for the folio book catalog.
//!
//! This crate has zero storage or HTTP dependencies so it can be used by
//! both the store implementations and the API layer.

pub mod error;
pub mod query;
pub mod types;
