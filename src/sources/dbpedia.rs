//! DBpedia linked-data search via the public SPARQL endpoint.
//!
//! Selects resources whose English label matches the query
//! case-insensitively, together with their English abstracts.

use crate::adapter::SourceAdapter;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::text::truncate_chars;
use crate::types::{ResultKind, SearchResult, Source};
use serde::Deserialize;

const ENDPOINT: &str = "https://dbpedia.org/sparql";

/// Maximum snippet length taken from an abstract.
const SNIPPET_CHARS: usize = 200;

/// DBpedia SPARQL adapter.
pub struct DbPediaAdapter;

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    #[serde(default)]
    results: SparqlResults,
}

#[derive(Debug, Default, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
struct Binding {
    resource: RdfTerm,
    label: RdfTerm,
    #[serde(rename = "abstract")]
    abstract_text: RdfTerm,
}

#[derive(Debug, Deserialize)]
struct RdfTerm {
    value: String,
}

impl SourceAdapter for DbPediaAdapter {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "DBpedia search");

        let client = http::build_client(config)?;
        let sparql = build_sparql(query, config.max_results);

        let response = client
            .get(ENDPOINT)
            .query(&[("query", sparql.as_str()), ("format", "json")])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("DBpedia request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("DBpedia HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("DBpedia response read failed: {e}")))?;

        parse_sparql_response(&body)
    }

    fn source_type(&self) -> Source {
        Source::DbPedia
    }
}

/// Build the label-regex SPARQL query for a search term.
///
/// The term is embedded in a quoted regex, so quotes and backslashes
/// must be escaped to keep the query well-formed.
pub(crate) fn build_sparql(query: &str, limit: usize) -> String {
    let term = query.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        r#"SELECT ?resource ?label ?abstract WHERE {{
    ?resource rdfs:label ?label ;
              dbo:abstract ?abstract .
    FILTER (regex(?label, "{term}", "i") && langMatches(lang(?label), "en"))
    FILTER (langMatches(lang(?abstract), "en"))
}}
LIMIT {limit}"#
    )
}

/// Parse a SPARQL JSON response body into results.
pub(crate) fn parse_sparql_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let response: SparqlResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("DBpedia JSON malformed: {e}")))?;

    let results = response
        .results
        .bindings
        .into_iter()
        .map(|binding| {
            SearchResult::from_source(
                Source::DbPedia,
                ResultKind::LinkedData,
                binding.label.value,
                truncate_chars(&binding.abstract_text.value, SNIPPET_CHARS),
                binding.resource.value,
            )
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = results.len(), "DBpedia results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_RESPONSE: &str = r#"{
        "head": {"vars": ["resource", "label", "abstract"]},
        "results": {
            "bindings": [
                {
                    "resource": {"type": "uri", "value": "http://dbpedia.org/resource/Quantum_computing"},
                    "label": {"type": "literal", "xml:lang": "en", "value": "Quantum computing"},
                    "abstract": {"type": "literal", "xml:lang": "en", "value": "Quantum computing is a type of computation whose operations can harness the phenomena of quantum mechanics."}
                }
            ]
        }
    }"#;

    #[test]
    fn parse_mock_response() {
        let results = parse_sparql_response(MOCK_RESPONSE).expect("should parse");
        assert_eq!(results.len(), 1);

        assert_eq!(results[0].title, "Quantum computing");
        assert_eq!(
            results[0].url,
            "http://dbpedia.org/resource/Quantum_computing"
        );
        assert_eq!(results[0].kind, ResultKind::LinkedData);
        assert!((results[0].score - 0.85).abs() < f64::EPSILON);
        assert!(results[0].snippet.starts_with("Quantum computing is a type"));
    }

    #[test]
    fn abstract_truncated_to_snippet_length() {
        let long = "x".repeat(500);
        let body = format!(
            r#"{{"results": {{"bindings": [{{
                "resource": {{"value": "http://dbpedia.org/resource/X"}},
                "label": {{"value": "X"}},
                "abstract": {{"value": "{long}"}}
            }}]}}}}"#
        );
        let results = parse_sparql_response(&body).expect("should parse");
        assert_eq!(results[0].snippet.chars().count(), SNIPPET_CHARS);
    }

    #[test]
    fn empty_bindings_yields_empty_results() {
        let results =
            parse_sparql_response(r#"{"results": {"bindings": []}}"#).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_sparql_response("<!DOCTYPE html>").unwrap_err();
        assert!(err.to_string().contains("DBpedia JSON malformed"));
    }

    #[test]
    fn sparql_embeds_term_and_limit() {
        let sparql = build_sparql("rust language", 3);
        assert!(sparql.contains(r#"regex(?label, "rust language", "i")"#));
        assert!(sparql.ends_with("LIMIT 3"));
    }

    #[test]
    fn sparql_escapes_quotes() {
        let sparql = build_sparql(r#"say "hello""#, 1);
        assert!(sparql.contains(r#"say \"hello\""#));
        assert!(!sparql.contains(r#"regex(?label, "say "hello"#));
    }

    #[test]
    fn source_type_is_dbpedia() {
        assert_eq!(DbPediaAdapter.source_type(), Source::DbPedia);
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_dbpedia_search() {
        let config = SearchConfig::default();
        let results = DbPediaAdapter
            .search("quantum computing", &config)
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
    }
}
