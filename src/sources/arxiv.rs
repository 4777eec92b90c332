//! arXiv academic search via the Atom export API.
//!
//! The feed is XML, but its element names are already lowercase and
//! html5ever's lenient parsing places them in the tree intact, so the
//! same CSS-selector machinery used for HTML pages extracts entries
//! without a dedicated XML dependency.

use crate::adapter::SourceAdapter;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::text::{squash_whitespace, truncate_chars};
use crate::types::{ResultKind, SearchResult, Source};
use scraper::{Html, Selector};

const ENDPOINT: &str = "http://export.arxiv.org/api/query";

/// Maximum snippet length taken from a paper abstract.
const SNIPPET_CHARS: usize = 200;

/// arXiv preprint search adapter.
pub struct ArxivAdapter;

impl SourceAdapter for ArxivAdapter {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "arXiv search");

        let client = http::build_client(config)?;
        let limit = config.max_results.to_string();
        let search_query = format!("all:{query}");

        let response = client
            .get(ENDPOINT)
            .query(&[
                ("search_query", search_query.as_str()),
                ("start", "0"),
                ("max_results", limit.as_str()),
                ("sortBy", "relevance"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("arXiv request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("arXiv HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("arXiv response read failed: {e}")))?;

        parse_atom_feed(&body)
    }

    fn source_type(&self) -> Source {
        Source::Arxiv
    }
}

/// Parse an arXiv Atom feed into results.
///
/// Each `<entry>` contributes one result; entries missing a title or id
/// are skipped rather than failing the whole feed.
pub(crate) fn parse_atom_feed(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(body);

    let entry_sel = Selector::parse("entry")
        .map_err(|e| SearchError::Parse(format!("invalid entry selector: {e:?}")))?;
    let title_sel = Selector::parse("title")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let summary_sel = Selector::parse("summary")
        .map_err(|e| SearchError::Parse(format!("invalid summary selector: {e:?}")))?;
    let id_sel = Selector::parse("id")
        .map_err(|e| SearchError::Parse(format!("invalid id selector: {e:?}")))?;

    let mut results = Vec::new();

    for entry in document.select(&entry_sel) {
        let Some(title_el) = entry.select(&title_sel).next() else {
            continue;
        };
        let title = squash_whitespace(&title_el.text().collect::<String>());
        if title.is_empty() {
            continue;
        }

        let Some(id_el) = entry.select(&id_sel).next() else {
            continue;
        };
        let id_text = id_el.text().collect::<String>();
        // Feed ids look like `http://arxiv.org/abs/2406.01234v1`.
        let Some(arxiv_id) = id_text.trim().split("/abs/").last().map(str::to_string) else {
            continue;
        };

        let summary = entry
            .select(&summary_sel)
            .next()
            .map(|el| squash_whitespace(&el.text().collect::<String>()))
            .unwrap_or_default();

        results.push(SearchResult::from_source(
            Source::Arxiv,
            ResultKind::AcademicPaper,
            title,
            truncate_chars(&summary, SNIPPET_CHARS),
            format!("https://arxiv.org/abs/{arxiv_id}"),
        ));
    }

    tracing::debug!(count = results.len(), "arXiv results parsed");
    Ok(results)
}
