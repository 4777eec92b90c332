//! Wikidata entity search via `wbsearchentities`.
//!
//! Returns structured-data entities with stable Q-ids; the entity
//! description doubles as the snippet.

use crate::adapter::SourceAdapter;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{ResultKind, SearchResult, Source};
use serde::Deserialize;

const ENDPOINT: &str = "https://www.wikidata.org/w/api.php";

/// Wikidata entity search adapter.
pub struct WikidataAdapter;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    search: Vec<EntityHit>,
}

#[derive(Debug, Deserialize)]
struct EntityHit {
    id: String,
    label: String,
    #[serde(default)]
    description: String,
}

impl SourceAdapter for WikidataAdapter {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "Wikidata search");

        let client = http::build_client(config)?;
        let limit = config.max_results.to_string();

        let response = client
            .get(ENDPOINT)
            .query(&[
                ("action", "wbsearchentities"),
                ("search", query),
                ("language", "en"),
                ("format", "json"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Wikidata request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Wikidata HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Wikidata response read failed: {e}")))?;

        parse_entity_response(&body)
    }

    fn source_type(&self) -> Source {
        Source::Wikidata
    }
}

/// Parse a `wbsearchentities` response body into results.
pub(crate) fn parse_entity_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Wikidata JSON malformed: {e}")))?;

    let results = response
        .search
        .into_iter()
        .map(|hit| {
            let url = format!("https://www.wikidata.org/wiki/{}", hit.id);
            let mut result = SearchResult::from_source(
                Source::Wikidata,
                ResultKind::StructuredData,
                hit.label,
                hit.description,
                url,
            );
            result.entity_id = Some(hit.id);
            result
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = results.len(), "Wikidata results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_RESPONSE: &str = r#"{
        "searchinfo": {"search": "douglas adams"},
        "search": [
            {
                "id": "Q42",
                "title": "Q42",
                "label": "Douglas Adams",
                "description": "English writer and humourist (1952-2001)",
                "match": {"type": "label", "language": "en", "text": "Douglas Adams"}
            },
            {
                "id": "Q28421831",
                "title": "Q28421831",
                "label": "Douglas Adams",
                "description": "American artist"
            }
        ],
        "success": 1
    }"#;

    #[test]
    fn parse_mock_response() {
        let results = parse_entity_response(MOCK_RESPONSE).expect("should parse");
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "Douglas Adams");
        assert_eq!(results[0].snippet, "English writer and humourist (1952-2001)");
        assert_eq!(results[0].url, "https://www.wikidata.org/wiki/Q42");
        assert_eq!(results[0].entity_id.as_deref(), Some("Q42"));
        assert_eq!(results[0].kind, ResultKind::StructuredData);
        assert!((results[0].score - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_description_becomes_empty_snippet() {
        let body = r#"{"search": [{"id": "Q1", "label": "universe"}]}"#;
        let results = parse_entity_response(body).expect("should parse");
        assert_eq!(results.len(), 1);
        assert!(results[0].snippet.is_empty());
    }

    #[test]
    fn empty_search_yields_empty_results() {
        let results = parse_entity_response(r#"{"search": [], "success": 1}"#).expect("parse");
        assert!(results.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_entity_response("<html>").unwrap_err();
        assert!(err.to_string().contains("Wikidata JSON malformed"));
    }

    #[test]
    fn source_type_is_wikidata() {
        assert_eq!(WikidataAdapter.source_type(), Source::Wikidata);
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_wikidata_search() {
        let config = SearchConfig::default();
        let results = WikidataAdapter
            .search("douglas adams", &config)
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
        assert!(results[0].entity_id.is_some());
    }
}
