use std::collections::HashMap;
use std::sync::Arc;

use super::FieldIndex;
use crate::error::{CatalogError, Result};
use crate::record::types::MetaRecord;

/// Equality index: every record is stored under the literal string value of
/// its field. Lookup is a single hash probe.
///
/// One bucket may hold the same record more than once when the record
/// legitimately produced the same value twice (two maintainers sharing an
/// email); deduplication is the join engine's job.
#[derive(Default)]
pub struct ExactMatchIndex {
    buckets: HashMap<String, Vec<Arc<MetaRecord>>>,
}

impl ExactMatchIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldIndex for ExactMatchIndex {
    fn index(&mut self, record: Arc<MetaRecord>, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(CatalogError::EmptyIndexValue);
        }
        self.buckets
            .entry(value.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    fn search(&self, query: &str) -> Result<Vec<Arc<MetaRecord>>> {
        if query.is_empty() {
            return Err(CatalogError::EmptySearchQuery);
        }
        Ok(self.buckets.get(query).cloned().unwrap_or_default())
    }
}
