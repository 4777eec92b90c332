//! Per-intent specialized search handlers.
//!
//! Each handler is a thin variant over a source adapter: it augments the
//! query with category-specific terms, relabels the results under the
//! handler's banner with a category base score, and optionally
//! post-filters. Single-answer categories (definition, weather) return a
//! 0- or 1-element vector so every handler has the same shape.

use crate::adapter::SourceAdapter;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::sources::{ArxivAdapter, DuckDuckGoAdapter};
use crate::text::truncate_chars;
use crate::types::{ResultKind, SearchResult};
use serde::Deserialize;

/// Snippet markers that qualify a result as statistical content.
const STAT_MARKERS: &[&str] = &[
    "percent",
    "%",
    "million",
    "billion",
    "data",
    "statistics",
    "average",
];

/// Maximum results returned by the capped handlers.
const HANDLER_CAP: usize = 5;

/// Maximum characters of a Wiktionary extract kept as a definition.
const DEFINITION_CHARS: usize = 300;

/// Relabel adapter results under a handler banner with a category score.
fn relabel(
    mut results: Vec<SearchResult>,
    banner: &str,
    kind: ResultKind,
    score: f64,
) -> Vec<SearchResult> {
    for result in &mut results {
        result.source = banner.to_string();
        result.kind = kind;
        result.score = score;
    }
    results
}

/// Recent news: web search weighted toward fresh coverage.
pub async fn news(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} latest news");
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;
    Ok(relabel(results, "News", ResultKind::News, 0.90))
}

/// Academic papers: arXiv plus scholar-hosted results from the web.
pub async fn academic(
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    let arxiv_config = SearchConfig {
        max_results: 3,
        ..config.clone()
    };
    let scholar_config = SearchConfig {
        max_results: 2,
        ..config.clone()
    };

    // Either source alone is enough; only both failing fails the handler.
    let arxiv_outcome = ArxivAdapter.search(query, &arxiv_config).await;

    let scholar_query = format!("{query} site:scholar.google.com OR site:researchgate.net");
    let scholar_outcome = DuckDuckGoAdapter.search(&scholar_query, &scholar_config).await;

    let mut results = Vec::new();
    let mut errors = Vec::new();

    match arxiv_outcome {
        Ok(papers) => results.extend(relabel(papers, "arXiv", ResultKind::AcademicPaper, 0.95)),
        Err(err) => {
            tracing::warn!(error = %err, "arXiv leg of academic search failed");
            errors.push(err.to_string());
        }
    }
    match scholar_outcome {
        Ok(pages) => results.extend(relabel(pages, "Scholar", ResultKind::AcademicPaper, 0.85)),
        Err(err) => {
            tracing::warn!(error = %err, "scholar leg of academic search failed");
            errors.push(err.to_string());
        }
    }

    if results.is_empty() && errors.len() == 2 {
        return Err(SearchError::AllSourcesFailed(errors.join("; ")));
    }

    results.truncate(HANDLER_CAP);
    Ok(results)
}

/// Statistical data: augmented web search filtered to numeric content.
pub async fn statistics(
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} statistics data 2024 2025");
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;

    let mut filtered: Vec<SearchResult> = results
        .into_iter()
        .filter(|r| has_statistical_content(&r.snippet))
        .collect();
    filtered.truncate(HANDLER_CAP);

    Ok(relabel(filtered, "Statistics", ResultKind::Statistics, 0.85))
}

/// Returns true if a snippet carries a numeric/statistical indicator.
pub(crate) fn has_statistical_content(snippet: &str) -> bool {
    let lowered = snippet.to_lowercase();
    STAT_MARKERS.iter().any(|marker| lowered.contains(marker))
}

#[derive(Debug, Deserialize)]
struct WiktionaryResponse {
    #[serde(default)]
    query: WiktionaryQuery,
}

#[derive(Debug, Default, Deserialize)]
struct WiktionaryQuery {
    #[serde(default)]
    pages: std::collections::HashMap<String, WiktionaryPage>,
}

#[derive(Debug, Deserialize)]
struct WiktionaryPage {
    #[serde(default)]
    extract: Option<String>,
}

/// Word definition from Wiktionary. At most one result.
pub async fn definition(
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    tracing::trace!(query, "Wiktionary definition lookup");

    let client = http::build_client(config)?;

    let response = client
        .get("https://en.wiktionary.org/w/api.php")
        .query(&[
            ("action", "query"),
            ("titles", query),
            ("prop", "extracts"),
            ("explaintext", "1"),
            ("format", "json"),
        ])
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("Wiktionary request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("Wiktionary HTTP error: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("Wiktionary response read failed: {e}")))?;

    parse_definition_response(&body, query)
}

/// Parse a Wiktionary extract response into a 0/1-element result vector.
pub(crate) fn parse_definition_response(
    body: &str,
    term: &str,
) -> Result<Vec<SearchResult>, SearchError> {
    let response: WiktionaryResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Wiktionary JSON malformed: {e}")))?;

    let extract = response
        .query
        .pages
        .into_values()
        .find_map(|page| page.extract.filter(|text| !text.is_empty()));

    let Some(extract) = extract else {
        return Ok(Vec::new());
    };

    Ok(vec![SearchResult {
        source: "Wiktionary".to_string(),
        title: term.to_string(),
        snippet: truncate_chars(&extract, DEFINITION_CHARS),
        url: format!("https://en.wiktionary.org/wiki/{}", term.replace(' ', "_")),
        score: 0.90,
        kind: ResultKind::Definition,
        date: None,
        author: None,
        entity_id: None,
    }])
}

/// Image pages: media-oriented web search (metadata only).
pub async fn images(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} images photos");
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;
    Ok(relabel(results, "Images", ResultKind::Image, 0.80))
}

/// Video pages: media-oriented web search (metadata only).
pub async fn videos(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} video watch");
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;
    Ok(relabel(results, "Videos", ResultKind::Video, 0.80))
}

/// Local information scoped to the configured region.
pub async fn local(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} in {} local", config.default_region);
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;
    Ok(relabel(results, "Local", ResultKind::Local, 0.80))
}

/// Current weather for a location. At most one result.
pub async fn weather(
    location: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("weather {location} today temperature");
    let mut results = DuckDuckGoAdapter.search(&augmented, config).await?;
    results.truncate(1);
    Ok(relabel(results, "Weather", ResultKind::Weather, 0.80))
}

/// Products and prices.
pub async fn products(
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} price buy online");
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;
    Ok(relabel(results, "Products", ResultKind::Product, 0.75))
}

/// Job openings scoped to the configured region.
pub async fn jobs(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} jobs {} hiring", config.default_region);
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;
    Ok(relabel(results, "Jobs", ResultKind::Job, 0.80))
}

/// Recipes with ingredients and instructions.
pub async fn recipes(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>, SearchError> {
    let augmented = format!("{query} recipe ingredients instructions");
    let results = DuckDuckGoAdapter.search(&augmented, config).await?;
    Ok(relabel(results, "Recipes", ResultKind::Recipe, 0.80))
}
