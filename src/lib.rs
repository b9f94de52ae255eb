//! Application Metadata Catalog Library
//!
//! This library crate defines the core modules of an in-memory catalog for
//! application metadata records. It serves as the foundation for the binary
//! executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of five loosely coupled subsystems:
//!
//! - **`error`**: The error taxonomy shared by every layer, from record
//!   intake failures to query-shape rejections and search timeouts.
//! - **`record`**: The data model. Defines the metadata record, the closed
//!   set of searchable fields with their wire names, and the validator that
//!   turns raw YAML into a typed record or a structured rejection.
//! - **`index`**: Per-field search structures. Scalar fields are served by
//!   an exact-match index, the description field by a tokenized full-text
//!   index, both behind one trait.
//! - **`store`**: The catalog store. Owns the index registry behind a single
//!   reader/writer lock and implements Append, Search, and the concurrent
//!   AND/OR join engine.
//! - **`server`**: The HTTP boundary. Axum handlers exposing record creation
//!   and multi-term search.

pub mod error;
pub mod index;
pub mod record;
pub mod server;
pub mod store;
