//! Field Index Tests
//!
//! Covers the tokenizer, both index variants, and the registry's mode
//! assignment.
//!
//! ## Test Scopes
//! - **Tokenizer**: Normalization, punctuation, digits, deduplication.
//! - **Exact-match**: Literal equality, bucket accumulation, invariants.
//! - **Full-text**: Token recall, case insensitivity, document resolution.
//! - **Registry**: Every field served, description tokenized.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::error::CatalogError;
    use crate::index::FieldIndex;
    use crate::index::exact::ExactMatchIndex;
    use crate::index::registry::IndexRegistry;
    use crate::index::text::FullTextIndex;
    use crate::index::tokenizer::{tokenize_query, tokenize_value};
    use crate::record::types::{MetaRecord, SearchField};

    fn record_titled(title: &str) -> Arc<MetaRecord> {
        Arc::new(MetaRecord {
            title: title.to_string(),
            ..MetaRecord::default()
        })
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_tokenize_value_lowercases() {
        let tokens = tokenize_value("Some TEXT Here");

        assert!(tokens.contains("some"));
        assert!(tokens.contains("text"));
        assert!(tokens.contains("here"));
        assert!(!tokens.contains("TEXT"));
    }

    #[test]
    fn test_tokenize_value_strips_punctuation() {
        let tokens = tokenize_value("hello, world! (really)");

        assert!(tokens.contains("hello"));
        assert!(tokens.contains("world"));
        assert!(tokens.contains("really"));
        assert!(!tokens.contains("hello,"));
    }

    #[test]
    fn test_tokenize_value_splits_on_underscores() {
        let tokens = tokenize_value("uses snake_case names");

        assert!(tokens.contains("uses"));
        assert!(tokens.contains("snake"));
        assert!(tokens.contains("case"));
        assert!(tokens.contains("names"));
        assert!(!tokens.contains("snake_case"));
    }

    #[test]
    fn test_tokenize_value_keeps_digits_and_short_words() {
        let tokens = tokenize_value("App 2 of 10");

        assert!(tokens.contains("app"));
        assert!(tokens.contains("2"));
        assert!(tokens.contains("of"));
        assert!(tokens.contains("10"));
    }

    #[test]
    fn test_tokenize_value_deduplicates() {
        let tokens = tokenize_value("app app app");

        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_tokenize_value_empty() {
        assert!(tokenize_value("").is_empty());
    }

    #[test]
    fn test_tokenize_query_preserves_order_and_duplicates() {
        let tokens = tokenize_query("first second first");

        assert_eq!(tokens, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_tokenize_query_splits_on_underscores() {
        let tokens = tokenize_query("snake_case");

        assert_eq!(tokens, vec!["snake", "case"]);
    }

    #[test]
    fn test_tokenize_query_folds_case_within_a_token() {
        let tokens = tokenize_query("oneForTesting");

        assert_eq!(tokens, vec!["onefortesting"]);
    }

    // ============================================================
    // EXACT-MATCH INDEX TESTS
    // ============================================================

    #[test]
    fn test_exact_index_hit_and_miss() {
        let mut index = ExactMatchIndex::new();
        let record = record_titled("Valid App 1");

        index.index(Arc::clone(&record), "Valid App 1").unwrap();

        let hits = index.search("Valid App 1").unwrap();
        assert_eq!(hits.len(), 1);
        assert!(Arc::ptr_eq(&hits[0], &record));

        let misses = index.search("Valid App").unwrap();
        assert!(misses.is_empty(), "a partial value must not match exactly");
    }

    #[test]
    fn test_exact_index_accumulates_records_per_value() {
        let mut index = ExactMatchIndex::new();
        let first = record_titled("App 1");
        let second = record_titled("App 2");

        index.index(Arc::clone(&first), "shared@mail.com").unwrap();
        index.index(Arc::clone(&second), "shared@mail.com").unwrap();

        let hits = index.search("shared@mail.com").unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_exact_index_is_case_sensitive() {
        let mut index = ExactMatchIndex::new();
        let record = record_titled("App");

        index.index(record, "Valid App 1").unwrap();

        assert!(index.search("valid app 1").unwrap().is_empty());
    }

    #[test]
    fn test_exact_index_rejects_empty_value_and_query() {
        let mut index = ExactMatchIndex::new();
        let record = record_titled("App");

        assert!(matches!(
            index.index(record, ""),
            Err(CatalogError::EmptyIndexValue)
        ));
        assert!(matches!(
            index.search(""),
            Err(CatalogError::EmptySearchQuery)
        ));
    }

    // ============================================================
    // FULL-TEXT INDEX TESTS
    // ============================================================

    #[test]
    fn test_full_text_matches_contained_token() {
        let mut index = FullTextIndex::new();
        let record = record_titled("App 1");

        index
            .index(Arc::clone(&record), "description of an app")
            .unwrap();

        let hits = index.search("app").unwrap();
        assert_eq!(hits.len(), 1);
        assert!(Arc::ptr_eq(&hits[0], &record));
    }

    #[test]
    fn test_full_text_is_case_insensitive() {
        let mut index = FullTextIndex::new();
        let record = record_titled("App 1");

        index
            .index(Arc::clone(&record), "Some text to index: Indexer")
            .unwrap();

        assert_eq!(index.search("indexer").unwrap().len(), 1);
        assert_eq!(index.search("INDEXER").unwrap().len(), 1);
    }

    #[test]
    fn test_full_text_matches_tokens_beside_underscores() {
        let mut index = FullTextIndex::new();
        let record = record_titled("App 1");

        index
            .index(Arc::clone(&record), "uses snake_case names internally")
            .unwrap();

        assert_eq!(index.search("snake").unwrap().len(), 1);
        assert_eq!(index.search("case").unwrap().len(), 1);
    }

    #[test]
    fn test_full_text_multiple_records_share_a_token() {
        let mut index = FullTextIndex::new();
        let first = record_titled("App 1");
        let second = record_titled("App 2");

        index.index(Arc::clone(&first), "an app to test").unwrap();
        index
            .index(Arc::clone(&second), "another app entirely")
            .unwrap();

        let hits = index.search("app").unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_full_text_returns_each_document_once() {
        let mut index = FullTextIndex::new();
        let record = record_titled("App 1");

        index
            .index(Arc::clone(&record), "sample app description")
            .unwrap();

        // Two query tokens hitting the same document must not duplicate it.
        let hits = index.search("sample app").unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_full_text_no_match_is_empty_not_error() {
        let index = FullTextIndex::new();

        let hits = index.search("anything").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_full_text_rejects_empty_value_and_query() {
        let mut index = FullTextIndex::new();
        let record = record_titled("App");

        assert!(matches!(
            index.index(record, ""),
            Err(CatalogError::EmptyIndexValue)
        ));
        assert!(matches!(
            index.search(""),
            Err(CatalogError::EmptySearchQuery)
        ));
    }

    // ============================================================
    // REGISTRY TESTS
    // ============================================================

    #[test]
    fn test_registry_serves_every_field() {
        let registry = IndexRegistry::new();

        for field in SearchField::ALL {
            // A miss must come back as an empty set from every index.
            let hits = registry.index_for(field).search("nosuchvalue").unwrap();
            assert!(hits.is_empty());
        }
    }

    #[test]
    fn test_registry_description_is_tokenized_others_are_not() {
        let mut registry = IndexRegistry::new();
        let record = record_titled("App 1");

        registry
            .index_for_mut(SearchField::Description)
            .index(Arc::clone(&record), "a very detailed description")
            .unwrap();
        registry
            .index_for_mut(SearchField::Title)
            .index(Arc::clone(&record), "Valid App 1")
            .unwrap();

        // Full-text: one token of the stored value is enough.
        let description_hits = registry
            .index_for(SearchField::Description)
            .search("detailed")
            .unwrap();
        assert_eq!(description_hits.len(), 1);

        // Exact-match: a fragment of the stored value is not.
        let title_hits = registry
            .index_for(SearchField::Title)
            .search("Valid")
            .unwrap();
        assert!(title_hits.is_empty());
    }
}
