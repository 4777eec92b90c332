//! Query optimization: stop-word stripping and keyword truncation.
//!
//! Raw queries are reduced to a compact keyword string before dispatch to
//! sources. Ranking always uses the *original* query, so the reduction
//! only affects what the sources see.

/// English stop words dropped during query optimization.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "is", "are",
    "was", "were",
];

/// Maximum number of keywords kept after stop-word removal.
const MAX_KEYWORDS: usize = 5;

/// Reduce a raw query to a compact keyword string.
///
/// Lowercases, splits on whitespace, drops stop words, keeps at most the
/// first five surviving tokens in order, and rejoins with single spaces.
/// Empty input yields empty output.
pub fn optimize(query: &str) -> String {
    reduce(query, STOP_WORDS, MAX_KEYWORDS)
}

/// Core reduction with an explicit stop-word set and keyword cap.
pub(crate) fn reduce(query: &str, stop_words: &[&str], max_keywords: usize) -> String {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !stop_words.contains(word))
        .take(max_keywords)
        .collect::<Vec<_>>()
        .join(" ")
}
