//! Unified search façade: intent dispatch, history, and presentation.
//!
//! [`UnifiedSearch`] is the single entry point the assistant layer talks
//! to. It resolves `Auto` mode through the intent detector, routes the
//! query to the matching specialized handler (or the multi-source
//! aggregator for general queries), and records every search in an
//! append-only history with bounded reads.

use std::time::SystemTime;

use crate::aggregator::Aggregator;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::intent::{self, Intent};
use crate::specialized;
use crate::text::truncate_chars;
use crate::types::SearchResult;

/// How the façade should classify a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Detect the intent from the query text.
    Auto,
    /// Force a specific intent, skipping detection.
    Fixed(Intent),
}

/// One façade search, as recorded in the history.
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub query: String,
    pub intent: Intent,
    pub timestamp: SystemTime,
}

/// A search plus the metadata the assistant layer renders.
#[derive(Debug, Clone)]
pub struct SmartSearchOutcome {
    pub query: String,
    pub intent: Intent,
    pub count: usize,
    pub results: Vec<SearchResult>,
}

/// Unified search engine combining intent routing, specialized handlers,
/// the multi-source aggregator, and search history.
#[derive(Debug)]
pub struct UnifiedSearch {
    aggregator: Aggregator,
    history: Vec<HistoryRecord>,
}

impl UnifiedSearch {
    /// Create a façade from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            aggregator: Aggregator::new(config)?,
            history: Vec::new(),
        })
    }

    /// Create a façade with default configuration.
    ///
    /// # Errors
    ///
    /// Same as [`UnifiedSearch::new`]; the default config is valid.
    pub fn with_defaults() -> Result<Self, SearchError> {
        Self::new(SearchConfig::default())
    }

    /// Search with intent routing, recording the query in the history.
    ///
    /// `Auto` mode resolves the intent from the query text; `Fixed`
    /// skips detection. General queries go through the cached
    /// multi-source aggregator; every other intent goes to its
    /// specialized handler.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AllSourcesFailed`] when every backing
    /// source for the chosen route fails; an empty vector is "no
    /// matches", not an error.
    pub async fn search(
        &mut self,
        query: &str,
        mode: SearchMode,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let intent = match mode {
            SearchMode::Auto => intent::detect(query),
            SearchMode::Fixed(intent) => intent,
        };

        self.history.push(HistoryRecord {
            query: query.to_string(),
            intent,
            timestamp: SystemTime::now(),
        });

        tracing::trace!(%intent, "dispatching search");

        let config = self.aggregator.config();
        match intent {
            Intent::News => specialized::news(query, config).await,
            Intent::Academic => specialized::academic(query, config).await,
            Intent::Statistics => specialized::statistics(query, config).await,
            Intent::Definition => specialized::definition(query, config).await,
            Intent::Images => specialized::images(query, config).await,
            Intent::Videos => specialized::videos(query, config).await,
            Intent::Local => specialized::local(query, config).await,
            Intent::Weather => specialized::weather(query, config).await,
            Intent::Products => specialized::products(query, config).await,
            Intent::Jobs => specialized::jobs(query, config).await,
            Intent::Recipes => specialized::recipes(query, config).await,
            Intent::General => self.aggregator.search(query).await,
        }
    }

    /// Detect-then-search, returning results with routing metadata.
    ///
    /// # Errors
    ///
    /// Same as [`UnifiedSearch::search`].
    pub async fn smart_search(&mut self, query: &str) -> Result<SmartSearchOutcome, SearchError> {
        let intent = intent::detect(query);
        let results = self.search(query, SearchMode::Fixed(intent)).await?;
        Ok(SmartSearchOutcome {
            query: query.to_string(),
            intent,
            count: results.len(),
            results,
        })
    }

    /// Classify a query without searching. Pure, no I/O.
    pub fn detect_intent(&self, query: &str) -> Intent {
        intent::detect(query)
    }

    /// Pattern-based completions for a partial query, at most five.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let lowered = partial.to_lowercase();
        let region = &self.aggregator.config().default_region;

        let mut suggestions = if lowered.contains("weather") {
            vec![
                format!("{partial} today"),
                format!("{partial} forecast"),
                format!("{partial} temperature"),
            ]
        } else if lowered.contains("recipe") {
            vec![
                format!("{partial} easy"),
                format!("{partial} ingredients"),
                format!("{partial} quick"),
            ]
        } else if lowered.contains("job") {
            vec![
                format!("{partial} {region}"),
                format!("{partial} remote"),
                format!("{partial} entry level"),
            ]
        } else {
            vec![
                format!("{partial} latest"),
                format!("{partial} tutorial"),
                format!("{partial} guide"),
                format!("{partial} 2025"),
            ]
        };

        suggestions.truncate(5);
        suggestions
    }

    /// The most recent `limit` history records, oldest first.
    pub fn recent_history(&self, limit: usize) -> &[HistoryRecord] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    /// Drop all history records.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Render results as numbered plain text for terminal display.
pub fn format_results(results: &[SearchResult], max_display: usize) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let mut out = String::from("Search results:\n\n");
    for (i, result) in results.iter().take(max_display).enumerate() {
        out.push_str(&format!("{}. {} [{}]\n", i + 1, result.title, result.source));
        if !result.snippet.is_empty() {
            out.push_str(&format!("   {}\n", truncate_chars(&result.snippet, 150)));
        }
        out.push_str(&format!("   {}\n", result.url));
        out.push_str(&format!("   relevance: {:.0}%\n\n", result.score * 100.0));
    }
    out
}

/// Export results as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if serialization fails.
pub fn export_json(results: &[SearchResult]) -> Result<String, SearchError> {
    serde_json::to_string_pretty(results)
        .map_err(|e| SearchError::Parse(format!("result export failed: {e}")))
}
