//! Wikipedia full-text search via the MediaWiki API.
//!
//! Uses `action=query&list=search`, which needs no API key and returns
//! JSON with HTML match markers embedded in snippets.

use crate::adapter::SourceAdapter;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{ResultKind, SearchResult, Source};
use serde::Deserialize;

const ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Wikipedia search adapter, the highest-authority encyclopedic source.
pub struct WikipediaAdapter;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    query: QueryBlock,
}

#[derive(Debug, Default, Deserialize)]
struct QueryBlock {
    #[serde(default)]
    search: Vec<PageHit>,
}

#[derive(Debug, Deserialize)]
struct PageHit {
    title: String,
    #[serde(default)]
    snippet: String,
}

impl SourceAdapter for WikipediaAdapter {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "Wikipedia search");

        let client = http::build_client(config)?;
        let limit = config.max_results.to_string();

        let response = client
            .get(ENDPOINT)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srwhat", "text"),
                ("format", "json"),
                ("srlimit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Wikipedia request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Wikipedia HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Wikipedia response read failed: {e}")))?;

        parse_search_response(&body)
    }

    fn source_type(&self) -> Source {
        Source::Wikipedia
    }
}

/// Parse a MediaWiki search response body into results.
///
/// Extracted as a separate function for testability with mock JSON.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Wikipedia JSON malformed: {e}")))?;

    let results = response
        .query
        .search
        .into_iter()
        .map(|hit| {
            let url = article_url(&hit.title);
            SearchResult::from_source(
                Source::Wikipedia,
                ResultKind::Encyclopedia,
                hit.title,
                strip_match_markers(&hit.snippet),
                url,
            )
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = results.len(), "Wikipedia results parsed");
    Ok(results)
}

/// Canonical article URL for a search hit title.
fn article_url(title: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"))
}

/// Remove the `searchmatch` highlight spans MediaWiki embeds in snippets.
fn strip_match_markers(snippet: &str) -> String {
    snippet
        .replace("<span class=\"searchmatch\">", "")
        .replace("</span>", "")
}
