//! Field Index Module
//!
//! One search structure per record field. Scalar fields (title, version,
//! company, ...) are served by an exact-match index; the description field
//! is served by a tokenized full-text index. Both sit behind the
//! [`FieldIndex`] trait so the store and the join engine never know which
//! variant they are calling.
//!
//! ## Submodules
//! - **`exact`**: Equality lookup keyed by the literal field value.
//! - **`text`**: Tokenized, case-insensitive full-text lookup.
//! - **`tokenizer`**: Shared text normalization (lowercased word tokens).
//! - **`registry`**: The fixed field-to-index map built at store startup.

pub mod exact;
pub mod registry;
pub mod text;
pub mod tokenizer;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::error::Result;
use crate::record::types::MetaRecord;

/// Capability contract of a single-field search index.
///
/// Mutation only happens while the store holds its writer lock, so
/// implementations do not lock internally.
pub trait FieldIndex: Send + Sync {
    /// Registers `value` as pointing at `record`. Fails on an empty value;
    /// a validated record never produces one, so that failure signals a
    /// broken invariant upstream, not a user error.
    fn index(&mut self, record: Arc<MetaRecord>, value: &str) -> Result<()>;

    /// Returns every record stored under `query`. A miss is an empty list,
    /// not an error; an empty query is rejected.
    fn search(&self, query: &str) -> Result<Vec<Arc<MetaRecord>>>;
}
