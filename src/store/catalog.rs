//! The catalog store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::index::registry::IndexRegistry;
use crate::record::types::{MetaRecord, SearchField};
use crate::record::validate;
use crate::store::join;
use crate::store::types::{JoinMethod, SearchTerm};

/// Owner of the index registry and entry point for both catalog
/// operations.
///
/// Cheap to share behind an `Arc`; the lock lives inside.
pub struct CatalogStore {
    registry: Arc<RwLock<IndexRegistry>>,
    search_deadline: Option<Duration>,
}

impl CatalogStore {
    /// Builds an empty store whose searches run without a deadline.
    pub fn new() -> Self {
        CatalogStore {
            registry: Arc::new(RwLock::new(IndexRegistry::new())),
            search_deadline: None,
        }
    }

    /// Builds an empty store whose searches abort after `deadline`.
    pub fn with_search_deadline(deadline: Duration) -> Self {
        CatalogStore {
            registry: Arc::new(RwLock::new(IndexRegistry::new())),
            search_deadline: Some(deadline),
        }
    }

    /// Builds a store around a prepared registry, so tests can control the
    /// indexes behind the lock.
    #[cfg(test)]
    pub(crate) fn with_registry_and_deadline(
        registry: IndexRegistry,
        deadline: Duration,
    ) -> Self {
        CatalogStore {
            registry: Arc::new(RwLock::new(registry)),
            search_deadline: Some(deadline),
        }
    }

    /// Parses, validates and indexes one raw record.
    ///
    /// The write lock is held across the whole sequence, so a record is
    /// never observable half-indexed by a concurrent search.
    pub async fn append(&self, raw_record: &[u8]) -> Result<()> {
        let mut registry = self.registry.write().await;

        let record = Arc::new(validate::parse_record(raw_record)?);
        for field in SearchField::ALL {
            for value in record.field_values(field) {
                registry
                    .index_for_mut(field)
                    .index(Arc::clone(&record), value)?;
            }
        }

        tracing::debug!("Appended record \"{}\" to the catalog", record.title);
        Ok(())
    }

    /// Resolves a term list against the indexes and joins the results.
    ///
    /// The term list must be non-empty and every term must carry a query;
    /// past that point individual term failures are swallowed by the join
    /// engine and can only shrink the answer.
    pub async fn search(
        &self,
        join_method: JoinMethod,
        terms: Vec<SearchTerm>,
    ) -> Result<Vec<Arc<MetaRecord>>> {
        if terms.is_empty() {
            return Err(CatalogError::EmptyTermList);
        }
        if let Some(term) = terms.iter().find(|term| term.query.is_empty()) {
            return Err(CatalogError::EmptyTermQuery { field: term.field });
        }

        // One owned read guard, shared by every term worker.
        let registry = Arc::new(Arc::clone(&self.registry).read_owned().await);

        let hits = match self.search_deadline {
            Some(deadline) => {
                tokio::time::timeout(deadline, join::execute(registry, join_method, terms))
                    .await
                    .map_err(|_| CatalogError::SearchTimeout(deadline))?
            }
            None => join::execute(registry, join_method, terms).await,
        };

        tracing::debug!(
            "Search with join method \"{}\" matched {} record(s)",
            join_method,
            hits.len()
        );
        Ok(hits)
    }

    /// Re-appends a stream of previously captured raw records, skipping
    /// the ones that no longer validate.
    ///
    /// Returns how many records were appended and how many were skipped.
    pub async fn replay<I>(&self, raw_records: I) -> (usize, usize)
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut appended = 0;
        let mut skipped = 0;
        for raw_record in raw_records {
            match self.append(&raw_record).await {
                Ok(()) => appended += 1,
                Err(e) => {
                    tracing::warn!("Skipping a record during replay: {}", e);
                    skipped += 1;
                }
            }
        }

        tracing::info!("Replayed {} record(s), skipped {}", appended, skipped);
        (appended, skipped)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
