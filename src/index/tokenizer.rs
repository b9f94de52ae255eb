use regex::Regex;
use std::collections::HashSet;

/// Splits a stored field value into its set of searchable tokens: maximal
/// alphanumeric runs, lowercased. Everything else, underscores included,
/// separates tokens. The set form deduplicates repeats within one value.
pub fn tokenize_value(text: &str) -> HashSet<String> {
    let re = Regex::new(r"[a-zA-Z0-9]+").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits a query string with the same rules as [`tokenize_value`], keeping
/// order and duplicates (hits are deduplicated by record downstream, not by
/// token).
pub fn tokenize_query(query: &str) -> Vec<String> {
    let re = Regex::new(r"[a-zA-Z0-9]+").unwrap();
    re.find_iter(&query.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
