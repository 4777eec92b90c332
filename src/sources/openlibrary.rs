//! OpenLibrary book search via `search.json`.
//!
//! The snippet is synthesized from author and first-publication metadata,
//! since the API returns no descriptive text.

use crate::adapter::SourceAdapter;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{ResultKind, SearchResult, Source};
use serde::Deserialize;

const ENDPOINT: &str = "https://openlibrary.org/search.json";

/// OpenLibrary book search adapter.
pub struct OpenLibraryAdapter;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    docs: Vec<BookDoc>,
}

#[derive(Debug, Deserialize)]
struct BookDoc {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author_name: Vec<String>,
    #[serde(default)]
    first_publish_year: Option<u32>,
    #[serde(default)]
    key: String,
}

impl SourceAdapter for OpenLibraryAdapter {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "OpenLibrary search");

        let client = http::build_client(config)?;
        let limit = config.max_results.to_string();

        let response = client
            .get(ENDPOINT)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("OpenLibrary request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("OpenLibrary HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("OpenLibrary response read failed: {e}")))?;

        parse_book_response(&body)
    }

    fn source_type(&self) -> Source {
        Source::OpenLibrary
    }
}

/// Parse an OpenLibrary `search.json` response body into results.
pub(crate) fn parse_book_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("OpenLibrary JSON malformed: {e}")))?;

    let results = response
        .docs
        .into_iter()
        .map(|doc| {
            // At most the first two authors, matching the display format.
            let authors = doc
                .author_name
                .iter()
                .take(2)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            let published = doc
                .first_publish_year
                .map_or_else(|| "N/A".to_string(), |y| y.to_string());
            let snippet = format!("Author: {authors}. Published: {published}");
            let url = format!("https://openlibrary.org{}", doc.key);

            let mut result = SearchResult::from_source(
                Source::OpenLibrary,
                ResultKind::Book,
                doc.title,
                snippet,
                url,
            );
            if !authors.is_empty() {
                result.author = Some(authors);
            }
            result.date = doc.first_publish_year.map(|y| y.to_string());
            result
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = results.len(), "OpenLibrary results parsed");
    Ok(results)
}
