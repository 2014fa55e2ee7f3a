//! Dictionary lookup over the vocabulary list.

use crate::types::VocabEntry;

/// Case-insensitive substring search across terms and translations,
/// in vocabulary order. An empty or whitespace-only query matches
/// nothing.
pub fn search<'a>(entries: &'a [VocabEntry], query: &str) -> Vec<&'a VocabEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.term.to_lowercase().contains(&needle)
                || entry.translation.to_lowercase().contains(&needle)
        })
        .collect()
}
