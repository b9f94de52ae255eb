//! Error types for the catalog service.
//!
//! One enum covers the whole taxonomy: record intake failures, query-shape
//! rejections, defensive index invariants, and search execution failures.
//! Everything here is transport-agnostic; the HTTP status mapping lives in
//! the server module.

use std::time::Duration;
use thiserror::Error;

use crate::record::types::SearchField;

/// Main error type for the catalog library.
#[derive(Debug, Error)]
pub enum CatalogError {
    // Record intake errors
    #[error("unable to parse the record: {0}")]
    UnparsableRecord(String),

    #[error("the following field(s) are missing or invalid: {}", .fields.join(", "))]
    InvalidRecord { fields: Vec<String> },

    // Query shape errors
    #[error("a search requires at least one search term")]
    EmptyTermList,

    #[error("the search term for field \"{field}\" has an empty query")]
    EmptyTermQuery { field: SearchField },

    #[error("the join method \"{0}\" is not supported")]
    UnsupportedJoinMethod(String),

    #[error("the following field(s) are not supported: {}", .fields.join(", "))]
    UnsupportedFields { fields: Vec<String> },

    // Index invariants (defensive; a validated record never trips them)
    #[error("cannot index an empty value")]
    EmptyIndexValue,

    #[error("cannot search for an empty query")]
    EmptySearchQuery,

    // Search execution
    #[error("the search did not complete within {0:?}")]
    SearchTimeout(Duration),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
