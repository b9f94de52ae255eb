//! Catalog Store Module
//!
//! ## Overview
//! Single-writer, multi-reader store that owns the index registry and
//! exposes the two catalog operations: appending a record and searching
//! for records across fields.
//!
//! ## Responsibilities
//! - **Append**: Validate a raw record, then index every field value.
//! - **Search**: Fan a term list out over the per-field indexes and join
//!   the partial results by the requested method.
//! - **Replay**: Re-append a stream of previously captured raw records.
//!
//! ## Concurrency
//! The registry sits behind a `tokio::sync::RwLock`. Appends take the
//! write lock for the whole validate-and-index sequence, so a record is
//! never observable half-indexed. Searches share the read lock through a
//! single owned guard handed to every term worker.
//!
//! ## Submodules
//! - `types`: Join methods and search terms.
//! - `join`: Concurrent term fan-out and result joining.
//! - `catalog`: The store itself.

pub mod catalog;
pub mod join;
pub mod types;
