//! Relevance ranking: lexical-overlap boost over source authority.
//!
//! Each result's score becomes its source base score plus a boost for
//! query words appearing in the title and snippet, clamped to `[0, 1]`:
//!
//! ```text
//! score = base + 0.1 * title_matches + 0.05 * snippet_matches
//! ```
//!
//! A result from a lower-authority source can outrank a higher-authority
//! one purely on keyword density. The sort is stable, so equal scores
//! retain their input order.

use crate::types::SearchResult;
use std::collections::HashSet;

/// Boost per query word found in the title.
const TITLE_BOOST: f64 = 0.1;

/// Boost per query word found in the snippet.
const SNIPPET_BOOST: f64 = 0.05;

/// Re-score and sort results against the *original* (pre-optimization)
/// query, descending by score.
pub fn rank(mut results: Vec<SearchResult>, original_query: &str) -> Vec<SearchResult> {
    let words = query_words(original_query);

    for result in &mut results {
        result.score = boosted_score(result, &words);
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

/// Unique lowercased words of the query.
fn query_words(query: &str) -> HashSet<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Compute the boosted, clamped score for one result.
///
/// Word membership is a substring test against the lowercased title and
/// snippet, so "intelligence" in the query matches "intelligence," in
/// prose.
fn boosted_score(result: &SearchResult, words: &HashSet<String>) -> f64 {
    let title = result.title.to_lowercase();
    let snippet = result.snippet.to_lowercase();

    let title_matches = words.iter().filter(|w| title.contains(w.as_str())).count();
    let snippet_matches = words.iter().filter(|w| snippet.contains(w.as_str())).count();

    let boosted = result.score
        + title_matches as f64 * TITLE_BOOST
        + snippet_matches as f64 * SNIPPET_BOOST;

    boosted.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultKind, SearchResult, Source};

    fn make_result(source: Source, title: &str, snippet: &str) -> SearchResult {
        SearchResult::from_source(source, ResultKind::Web, title, snippet, "https://x.com")
    }

    #[test]
    fn order_is_non_increasing() {
        let results = vec![
            make_result(Source::DuckDuckGo, "nothing relevant", "nothing"),
            make_result(Source::Wikipedia, "rust language", "rust is a language"),
            make_result(Source::OpenLibrary, "rust", "a book"),
        ];
        let ranked = rank(results, "rust language");
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn scores_stay_within_unit_interval() {
        // Wikipedia base 0.9 + heavy matches would exceed 1.0 unclamped.
        let results = vec![make_result(
            Source::Wikipedia,
            "rust rust language language",
            "rust language rust language",
        )];
        let ranked = rank(results, "rust language");
        assert!((ranked[0].score - 1.0).abs() < f64::EPSILON);
        for r in &ranked {
            assert!((0.0..=1.0).contains(&r.score));
        }
    }

    #[test]
    fn title_match_boosts_by_tenth() {
        let results = vec![make_result(Source::DuckDuckGo, "rust overview", "unrelated")];
        let ranked = rank(results, "rust");
        // 0.75 base + 0.1 title match
        assert!((ranked[0].score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn snippet_match_boosts_by_twentieth() {
        let results = vec![make_result(Source::DuckDuckGo, "unrelated", "all about rust")];
        let ranked = rank(results, "rust");
        // 0.75 base + 0.05 snippet match
        assert!((ranked[0].score - 0.80).abs() < 1e-9);
    }

    #[test]
    fn keyword_density_outranks_authority() {
        let results = vec![
            make_result(Source::Wikipedia, "unrelated article", "nothing here"),
            make_result(
                Source::DuckDuckGo,
                "rust async runtime tokio",
                "rust async runtime tokio explained",
            ),
        ];
        let ranked = rank(results, "rust async runtime tokio");
        // DDG: 0.75 + 4*0.1 + 4*0.05 = 1.0 (clamped); Wikipedia: 0.9.
        assert_eq!(ranked[0].source, "DuckDuckGo");
        assert!((ranked[0].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_retain_input_order() {
        let mut first = make_result(Source::Wikidata, "alpha", "");
        first.url = "https://first.example".into();
        let mut second = make_result(Source::Wikidata, "beta", "");
        second.url = "https://second.example".into();

        // Neither matches the query, so both keep base 0.85.
        let ranked = rank(vec![first, second], "zzz");
        assert_eq!(ranked[0].url, "https://first.example");
        assert_eq!(ranked[1].url, "https://second.example");
    }

    #[test]
    fn membership_is_substring_based() {
        let results = vec![make_result(Source::DuckDuckGo, "intelligence, artificial", "")];
        let ranked = rank(results, "intelligence");
        assert!((ranked[0].score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn query_matching_is_case_insensitive() {
        let results = vec![make_result(Source::DuckDuckGo, "RUST Language", "")];
        let ranked = rank(results, "rust");
        assert!((ranked[0].score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn duplicate_query_words_counted_once() {
        let results = vec![make_result(Source::DuckDuckGo, "rust guide", "")];
        let ranked = rank(results, "rust rust rust");
        assert!((ranked[0].score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(rank(vec![], "anything").is_empty());
    }

    #[test]
    fn empty_query_leaves_base_scores() {
        let results = vec![make_result(Source::Wikipedia, "title", "snippet")];
        let ranked = rank(results, "");
        assert!((ranked[0].score - 0.90).abs() < f64::EPSILON);
    }
}
