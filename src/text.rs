//! Small text helpers shared by adapters and formatting.

/// Truncate to at most `max` characters on a char boundary.
///
/// Atom summaries and DBpedia abstracts routinely contain multi-byte
/// characters, so byte slicing is not safe here.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub(crate) fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
