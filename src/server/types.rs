//! Catalog Wire Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) of the
//! catalog server.
//!
//! Requests and responses are JSON; the record payload inside them stays a
//! YAML string in both directions.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint for appending one record to the catalog.
pub const ENDPOINT_RECORDS: &str = "/records";
/// Public endpoint for searching records across the field indexes.
pub const ENDPOINT_SEARCH: &str = "/records/search";

/// Message returned with every successful append.
pub const RECORD_CREATED_MESSAGE: &str = "The record was added successfully.";

// --- Data Transfer Objects ---

/// Client request for appending a record.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    /// The record itself, as one YAML document.
    pub record: String,
}

/// Acknowledgment for a successful append.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub message: String,
}

/// Client request for a search across the catalog.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecordsRequest {
    /// Wire name of the join method ("and" or "or").
    pub join_method: String,
    /// The terms to resolve and join.
    pub search_terms: Vec<SearchTermPayload>,
}

/// One field-scoped query inside a search request.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchTermPayload {
    /// Wire name of the field to search.
    pub field: String,
    /// Query handed to that field's index.
    pub query: String,
}

/// Response carrying every record a search matched.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRecordsResponse {
    /// Matching records, rendered back to YAML.
    pub records: Vec<String>,
}

/// Error payload returned with every non-2xx status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
