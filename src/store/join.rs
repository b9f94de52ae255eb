//! Concurrent join engine.
//!
//! Every term of a search runs as its own task against the shared read
//! guard, and a single collector merges the partial results. The merge
//! counts, per record, how many distinct terms matched it; the join
//! method then decides which counts survive.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::OwnedRwLockReadGuard;
use tokio::sync::mpsc;

use crate::index::registry::IndexRegistry;
use crate::record::types::MetaRecord;
use crate::store::types::{JoinMethod, SearchTerm};

/// A record together with the number of distinct terms that matched it.
struct TermHits {
    record: Arc<MetaRecord>,
    terms_matched: usize,
}

/// Runs every term concurrently and joins the partial results.
///
/// Term lookups that fail are logged and dropped; they contribute nothing
/// to the join, so a failed term can only shrink the result set.
pub async fn execute(
    registry: Arc<OwnedRwLockReadGuard<IndexRegistry>>,
    join_method: JoinMethod,
    terms: Vec<SearchTerm>,
) -> Vec<Arc<MetaRecord>> {
    if terms.is_empty() {
        return Vec::new();
    }

    let threshold = terms.len();
    let (tx, mut rx) = mpsc::channel(threshold);

    // 1. Fan out: one worker per term, all sharing one read guard.
    for term in terms {
        let registry = Arc::clone(&registry);
        let tx = tx.clone();
        tokio::spawn(async move {
            let hits = registry.index_for(term.field).search(&term.query);
            // A failed send means the collector already hung up.
            let _ = tx.send((term, hits)).await;
        });
    }
    drop(tx);

    // 2. Fan in: count distinct matching terms per record. Records are
    //    keyed by pointer identity; the store hands out one allocation
    //    per appended record.
    let mut merged: HashMap<usize, TermHits> = HashMap::new();
    while let Some((term, hits)) = rx.recv().await {
        let hits = match hits {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!("Term lookup on field \"{}\" failed: {}", term.field, e);
                continue;
            }
        };

        // A record can carry the same value twice (two maintainers with a
        // shared mailbox). One term still counts once toward the threshold.
        let mut seen = HashSet::new();
        for record in hits {
            let key = Arc::as_ptr(&record) as usize;
            if !seen.insert(key) {
                continue;
            }
            merged
                .entry(key)
                .and_modify(|hit| hit.terms_matched += 1)
                .or_insert(TermHits {
                    record,
                    terms_matched: 1,
                });
        }
    }

    // 3. Join.
    match join_method {
        JoinMethod::Or => merged.into_values().map(|hit| hit.record).collect(),
        JoinMethod::And => merged
            .into_values()
            .filter(|hit| hit.terms_matched == threshold)
            .map(|hit| hit.record)
            .collect(),
    }
}
