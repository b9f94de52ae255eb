//! HTTP Server Module
//!
//! ## Overview
//! Thin axum layer over the catalog store: two POST endpoints, JSON bodies
//! in and out, with the records themselves carried as YAML strings.
//!
//! ## Responsibilities
//! - **Routing**: Wire both endpoints to their handlers and inject the store.
//! - **Decoding**: Map wire names onto the store's typed interface.
//! - **Status mapping**: Translate catalog errors into HTTP status codes.
//!
//! ## Submodules
//! - `types`: Endpoints and Data Transfer Objects.
//! - `handlers`: The request handlers.

use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};

use crate::server::handlers::{handle_create_record, handle_search_records};
use crate::server::types::{ENDPOINT_RECORDS, ENDPOINT_SEARCH};
use crate::store::catalog::CatalogStore;

pub mod handlers;
pub mod types;


/// Builds the application router with the store injected as an extension.
pub fn router(store: Arc<CatalogStore>) -> Router {
    Router::new()
        .route(ENDPOINT_RECORDS, post(handle_create_record))
        .route(ENDPOINT_SEARCH, post(handle_search_records))
        .layer(Extension(store))
}
