//! Query Normalization & Matching
//!
//! Free-text search over the catalog, insensitive to case and diacritics so
//! "cafe" finds "Café" and vice versa.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::Item;

/// Lowercase, decompose to NFD and drop combining marks, leaving base
/// letters only. Idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// True when the item matches the already-normalized query. Empty query
/// matches everything; otherwise substring search over the normalized
/// concatenation of name, description and note.
pub fn matches_item(item: &Item, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    let haystack = normalize(&format!(
        "{} {} {}",
        item.name,
        item.desc.as_deref().unwrap_or(""),
        item.note.as_deref().unwrap_or("")
    ));
    haystack.contains(normalized_query)
}
