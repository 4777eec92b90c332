//! Multi-source aggregation: optimize → cache → fan out → collect → rank.
//!
//! Queries every configured source concurrently under a shared deadline,
//! collects per-source outcomes, ranks the merged results against the
//! original query, and caches the ranked sequence.

use std::time::Duration;

use crate::adapter::SourceAdapter;
use crate::cache::{CacheKey, ResultCache};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::query;
use crate::rank;
use crate::sources::{
    ArxivAdapter, DbPediaAdapter, DuckDuckGoAdapter, OpenLibraryAdapter, WikidataAdapter,
    WikipediaAdapter,
};
use crate::types::{SearchResult, Source};

/// A source that failed during a fan-out, with the reason.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub source: Source,
    pub reason: String,
}

/// The outcome of an aggregate search, including partial-failure
/// diagnostics. An empty `results` with a non-empty `failures` list
/// means some sources were down but at least one healthy source simply
/// had no matches.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Ranked results, best first.
    pub results: Vec<SearchResult>,
    /// Sources that failed this search (empty on a cache hit).
    pub failures: Vec<SourceFailure>,
    /// Whether the results came from the cache.
    pub cached: bool,
}

/// Multi-source search engine with an instance-owned result cache.
#[derive(Debug)]
pub struct Aggregator {
    config: SearchConfig,
    cache: Option<ResultCache>,
}

impl Aggregator {
    /// Create an aggregator from a validated configuration.
    ///
    /// A `cache_ttl_seconds` of 0 disables caching entirely.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let cache = (config.cache_ttl_seconds > 0)
            .then(|| ResultCache::new(config.cache_ttl_seconds, config.cache_capacity));
        Ok(Self { config, cache })
    }

    /// The configuration this aggregator was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search all configured sources, returning just the ranked results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AllSourcesFailed`] only if **every** queried
    /// source fails. Partial failures are logged and degraded to empty
    /// contributions.
    pub async fn search(&self, raw_query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.search_with_report(raw_query)
            .await
            .map(|report| report.results)
    }

    /// Search all configured sources, returning results plus diagnostics.
    ///
    /// # Errors
    ///
    /// Same as [`Aggregator::search`].
    pub async fn search_with_report(&self, raw_query: &str) -> Result<SearchReport, SearchError> {
        let optimized = query::optimize(raw_query);
        let key = CacheKey::new(&optimized, &self.config.sources);

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key).await {
                tracing::debug!(query = %optimized, "cache hit");
                return Ok(SearchReport {
                    results: (*hit).clone(),
                    failures: Vec::new(),
                    cached: true,
                });
            }
        }

        let outcomes = fan_out(&optimized, &self.config).await;
        let (merged, failures) = collect_outcomes(outcomes)?;

        // Rank against the original query, not the optimized one.
        let ranked = rank::rank(merged, raw_query);

        if let Some(cache) = &self.cache {
            cache.insert(key, ranked.clone()).await;
        }

        Ok(SearchReport {
            results: ranked,
            failures,
            cached: false,
        })
    }
}

/// Query every configured source concurrently under a shared deadline.
///
/// Each adapter future is wrapped in [`tokio::time::timeout`], so the
/// aggregate wall-clock cost is bounded by the slowest single source.
async fn fan_out(
    query: &str,
    config: &SearchConfig,
) -> Vec<(Source, Result<Vec<SearchResult>, SearchError>)> {
    let deadline = Duration::from_secs(config.timeout_seconds);

    let futures: Vec<_> = config
        .sources
        .iter()
        .map(|source| {
            let q = query.to_string();
            let cfg = config.clone();
            let src = *source;
            async move {
                let outcome = match tokio::time::timeout(deadline, query_source(src, &q, &cfg))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(SearchError::Timeout(format!(
                        "{src} exceeded {}s deadline",
                        cfg.timeout_seconds
                    ))),
                };
                (src, outcome)
            }
        })
        .collect();

    futures::future::join_all(futures).await
}

/// Query a single source, dispatching to the concrete adapter.
async fn query_source(
    source: Source,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    match source {
        Source::Wikipedia => WikipediaAdapter.search(query, config).await,
        Source::Wikidata => WikidataAdapter.search(query, config).await,
        Source::OpenLibrary => OpenLibraryAdapter.search(query, config).await,
        Source::DuckDuckGo => DuckDuckGoAdapter.search(query, config).await,
        Source::Arxiv => ArxivAdapter.search(query, config).await,
        Source::DbPedia => DbPediaAdapter.search(query, config).await,
    }
}

/// Merge per-source outcomes, separating results from failures.
///
/// # Errors
///
/// Returns [`SearchError::AllSourcesFailed`] iff every outcome is an
/// error. Some sources returning empty result sets keeps the aggregate
/// healthy; that is "no matches", not an outage.
pub fn collect_outcomes(
    outcomes: Vec<(Source, Result<Vec<SearchResult>, SearchError>)>,
) -> Result<(Vec<SearchResult>, Vec<SourceFailure>), SearchError> {
    let total = outcomes.len();
    let mut merged: Vec<SearchResult> = Vec::new();
    let mut failures: Vec<SourceFailure> = Vec::new();

    for (source, outcome) in outcomes {
        match outcome {
            Ok(results) => {
                tracing::debug!(%source, count = results.len(), "source returned results");
                merged.extend(results);
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "source query failed");
                failures.push(SourceFailure {
                    source,
                    reason: err.to_string(),
                });
            }
        }
    }

    if total > 0 && failures.len() == total {
        let reasons = failures
            .iter()
            .map(|f| format!("{}: {}", f.source, f.reason))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SearchError::AllSourcesFailed(reasons));
    }

    Ok((merged, failures))
}
