use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::FieldIndex;
use super::tokenizer::{tokenize_query, tokenize_value};
use crate::error::{CatalogError, Result};
use crate::record::types::MetaRecord;

/// Tokenized full-text index.
///
/// Each indexed value receives a fresh document id; the id is posted under
/// every token of the value and resolved back to the record through the
/// document table at search time. The id counter is atomic, so assignment
/// stays collision-free even for an index used outside the store's writer
/// lock.
#[derive(Default)]
pub struct FullTextIndex {
    postings: HashMap<String, Vec<u64>>,
    documents: HashMap<u64, Arc<MetaRecord>>,
    next_doc_id: AtomicU64,
}

impl FullTextIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldIndex for FullTextIndex {
    fn index(&mut self, record: Arc<MetaRecord>, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(CatalogError::EmptyIndexValue);
        }
        let doc_id = self.next_doc_id.fetch_add(1, Ordering::Relaxed);
        for token in tokenize_value(value) {
            self.postings.entry(token).or_default().push(doc_id);
        }
        self.documents.insert(doc_id, record);
        Ok(())
    }

    fn search(&self, query: &str) -> Result<Vec<Arc<MetaRecord>>> {
        if query.is_empty() {
            return Err(CatalogError::EmptySearchQuery);
        }

        // Union over the query tokens, each document resolved once.
        let mut seen: HashSet<u64> = HashSet::new();
        let mut hits = Vec::new();
        for token in tokenize_query(query) {
            let Some(doc_ids) = self.postings.get(&token) else {
                continue;
            };
            for doc_id in doc_ids {
                if seen.insert(*doc_id)
                    && let Some(record) = self.documents.get(doc_id)
                {
                    hits.push(Arc::clone(record));
                }
            }
        }
        Ok(hits)
    }
}
