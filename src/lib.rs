//! # lyra-search
//!
//! Multi-source knowledge search for Lyra.
//!
//! This crate aggregates encyclopedic, structured-data, bibliographic,
//! academic, and general-web sources behind one ranked result API. It
//! compiles into Lyra's binary as a library dependency: no wire
//! protocol, no CLI, no API keys.
//!
//! ## Design
//!
//! - Queries Wikipedia, Wikidata, OpenLibrary, DuckDuckGo, arXiv, and
//!   DBpedia concurrently and merges results into one ranked sequence
//! - Scores combine fixed source authority with lexical query overlap
//! - In-memory TTL cache keyed by (optimized query, source set)
//! - Intent detection routes queries to specialized handlers
//!   (news, academic, statistics, definitions, weather, ...)
//! - Graceful degradation: failing sources are reported, not fatal,
//!   unless every source fails
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners: this is a library, not a server
//! - Search queries are logged only at trace level

pub mod adapter;
pub mod aggregator;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod intent;
pub mod query;
pub mod rank;
pub mod sources;
pub mod specialized;
mod text;
pub mod types;
pub mod unified;

pub use adapter::SourceAdapter;
pub use aggregator::{Aggregator, SearchReport, SourceFailure};
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use intent::Intent;
pub use types::{ResultKind, SearchResult, Source};
pub use unified::{SearchMode, UnifiedSearch};

/// Search all configured sources and return one ranked result sequence.
///
/// Convenience entry point that builds a throwaway [`Aggregator`]; the
/// result cache lives only for this call. Own an [`Aggregator`] or
/// [`UnifiedSearch`] instance to get caching across calls.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration, or
/// [`SearchError::AllSourcesFailed`] if every queried source fails.
/// Individual source failures are logged but do not fail the search.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lyra_search::Result<()> {
/// let config = lyra_search::SearchConfig::default();
/// let results = lyra_search::search("quantum computing", &config).await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    Aggregator::new(config.clone())?.search(query).await
}

/// Search with default configuration.
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(query: &str) -> Result<Vec<SearchResult>> {
    search(query, &SearchConfig::default()).await
}

/// Classify a query into an [`Intent`] without any I/O.
///
/// # Examples
///
/// ```
/// use lyra_search::Intent;
///
/// assert_eq!(lyra_search::detect_intent("latest temperature report"), Intent::News);
/// assert_eq!(lyra_search::detect_intent("pasta carbonara recipe"), Intent::Recipes);
/// ```
pub fn detect_intent(query: &str) -> Intent {
    intent::detect(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_max_results() {
        let config = SearchConfig {
            max_results: 0,
            ..Default::default()
        };
        let result = search("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_results"));
    }

    #[tokio::test]
    async fn search_validates_config_empty_sources() {
        let config = SearchConfig {
            sources: vec![],
            ..Default::default()
        };
        let result = search("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("source"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[test]
    fn detect_intent_matches_module_function() {
        assert_eq!(detect_intent("what is a closure"), Intent::Definition);
        assert_eq!(detect_intent("nothing special here"), Intent::General);
    }
}
