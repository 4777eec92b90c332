//! Trait definition for pluggable knowledge source adapters.
//!
//! Each source (Wikipedia, Wikidata, OpenLibrary, DuckDuckGo, arXiv,
//! DBpedia) implements [`SourceAdapter`] to provide a uniform interface
//! for querying and normalizing results.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{SearchResult, Source};

/// A pluggable knowledge source adapter.
///
/// Implementors perform one outbound request against a fixed external
/// endpoint and map the source-specific response shape onto
/// [`SearchResult`]. Each adapter handles its own:
///
/// - URL and parameter construction with query encoding
/// - Response parsing (JSON, HTML, or Atom)
/// - Typed errors for network, HTTP, and parse failures
///
/// Adapters surface failures as [`SearchError`]; the orchestrator, not
/// the adapter, decides that a failed source degrades to an empty
/// contribution. All implementations must be `Send + Sync` so sources can
/// be queried concurrently.
pub trait SourceAdapter: Send + Sync {
    /// Query this source and return normalized results.
    ///
    /// `config.max_results` bounds how many results the source is asked
    /// for; `config.timeout_seconds` bounds the request.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails or the response
    /// cannot be parsed.
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Returns which [`Source`] variant this adapter queries.
    fn source_type(&self) -> Source;

    /// Base authority score applied to every result from this source.
    ///
    /// Typically delegates to [`Source::base_score()`].
    fn base_score(&self) -> f64 {
        self.source_type().base_score()
    }
}
