//! DuckDuckGo web search, the crate's only general-web source.
//!
//! Uses the HTML-only endpoint at `https://html.duckduckgo.com/html/`,
//! which requires no JavaScript and tolerates automated requests. Result
//! links are wrapped in a redirect whose `uddg` parameter carries the
//! real URL.

use crate::adapter::SourceAdapter;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{ResultKind, SearchResult, Source};
use scraper::{Html, Selector};
use url::Url;

const ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo HTML endpoint adapter, also the workhorse behind the
/// specialized handlers.
pub struct DuckDuckGoAdapter;

impl DuckDuckGoAdapter {
    /// Extract the target URL from DuckDuckGo's redirect wrapper.
    ///
    /// Links look like `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`;
    /// the `uddg` query parameter holds the percent-encoded destination.
    /// Direct links pass through unchanged.
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

impl SourceAdapter for DuckDuckGoAdapter {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");

        let client = http::build_client(config)?;

        let response = client
            .post(ENDPOINT)
            .form(&[("q", query)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("DuckDuckGo request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("DuckDuckGo HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("DuckDuckGo response read failed: {e}")))?;

        parse_result_page(&html, config.max_results)
    }

    fn source_type(&self) -> Source {
        Source::DuckDuckGo
    }
}

/// Parse a DuckDuckGo HTML result page.
///
/// Extracted as a separate function for testability with mock HTML.
/// Ad blocks carry a `result--ad` class and are excluded by the selector.
pub(crate) fn parse_result_page(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let Some(href) = title_el.value().attr("href") else {
            continue;
        };

        let Some(url) = DuckDuckGoAdapter::extract_url(href) else {
            continue;
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(SearchResult::from_source(
            Source::DuckDuckGo,
            ResultKind::Web,
            title,
            snippet,
            url,
        ));

        if results.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = results.len(), "DuckDuckGo results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust-lang.org%2F&amp;rut=abc123">
        Rust Programming Language
    </a>
    <div class="result__snippet">
        A language empowering everyone to build reliable and efficient software.
    </div>
</div>
<div class="result results_links results_links_deep web-result result--ad">
    <a class="result__a" href="https://ads.example.com/click">
        Sponsored: Learn Rust Fast (Ad)
    </a>
    <div class="result__snippet">Buy our course.</div>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="https://doc.rust-lang.org/book/">
        The Rust Programming Language Book
    </a>
    <div class="result__snippet">
        An introductory book about Rust.
    </div>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fen.wikipedia.org%2Fwiki%2FRust_(programming_language)&amp;rut=def456">
        Rust (programming language) - Wikipedia
    </a>
    <div class="result__snippet">
        Rust is a multi-paradigm, general-purpose programming language.
    </div>
</div>
</body>
</html>"#;

    #[test]
    fn extract_url_from_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc";
        assert_eq!(
            DuckDuckGoAdapter::extract_url(href),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn extract_url_direct_link() {
        assert_eq!(
            DuckDuckGoAdapter::extract_url("https://example.com/direct"),
            Some("https://example.com/direct".to_string())
        );
    }

    #[test]
    fn extract_url_invalid() {
        assert!(DuckDuckGoAdapter::extract_url("not-a-url").is_none());
    }

    #[test]
    fn parse_mock_html_returns_results() {
        let results = parse_result_page(MOCK_HTML, 10).expect("should parse");
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].url, "https://www.rust-lang.org/");
        assert!(results[0].snippet.contains("reliable and efficient"));
        assert_eq!(results[0].source, "DuckDuckGo");
        assert_eq!(results[0].kind, ResultKind::Web);
        assert!((results[0].score - 0.75).abs() < f64::EPSILON);

        assert_eq!(results[1].url, "https://doc.rust-lang.org/book/");
        assert!(results[2].url.contains("wikipedia.org"));
    }

    #[test]
    fn ads_are_excluded() {
        let results = parse_result_page(MOCK_HTML, 10).expect("should parse");
        for r in &results {
            assert!(!r.title.contains("(Ad)"), "ad slipped through: {}", r.title);
        }
    }

    #[test]
    fn parse_respects_max_results() {
        let results = parse_result_page(MOCK_HTML, 2).expect("should parse");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        let results = parse_result_page("<html><body></body></html>", 10).expect("parse");
        assert!(results.is_empty());
    }

    #[test]
    fn source_type_is_duckduckgo() {
        assert_eq!(DuckDuckGoAdapter.source_type(), Source::DuckDuckGo);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DuckDuckGoAdapter>();
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_duckduckgo_search() {
        let config = SearchConfig::default();
        let results = DuckDuckGoAdapter
            .search("rust programming", &config)
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
        for r in &results {
            assert!(!r.title.is_empty());
            assert!(!r.url.is_empty());
        }
    }
}
