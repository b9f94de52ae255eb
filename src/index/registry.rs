use std::collections::HashMap;

use super::FieldIndex;
use super::exact::ExactMatchIndex;
use super::text::FullTextIndex;
use crate::record::types::SearchField;

/// The fixed field-to-index map.
///
/// Built once at store construction: a full-text index for the description
/// field, an exact-match index for every other field. The set never changes
/// afterwards, so lookups for a known field always succeed.
pub struct IndexRegistry {
    indexes: HashMap<SearchField, Box<dyn FieldIndex>>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        let mut indexes: HashMap<SearchField, Box<dyn FieldIndex>> = HashMap::new();
        for field in SearchField::ALL {
            let index: Box<dyn FieldIndex> = if field.is_full_text() {
                Box::new(FullTextIndex::new())
            } else {
                Box::new(ExactMatchIndex::new())
            };
            indexes.insert(field, index);
        }
        Self { indexes }
    }

    /// The index serving `field`. Every field is registered at
    /// construction, so the lookup is infallible.
    pub fn index_for(&self, field: SearchField) -> &dyn FieldIndex {
        self.indexes[&field].as_ref()
    }

    /// Swaps the index serving `field`, so tests can stand in a slow or
    /// failing implementation.
    #[cfg(test)]
    pub(crate) fn set_index(&mut self, field: SearchField, index: Box<dyn FieldIndex>) {
        self.indexes.insert(field, index);
    }

    pub fn index_for_mut(&mut self, field: SearchField) -> &mut dyn FieldIndex {
        self.indexes
            .get_mut(&field)
            .expect("every search field is registered at construction")
            .as_mut()
    }
}

impl Default for IndexRegistry {
    fn default() -> Self {
        Self::new()
    }
}
