//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which sources are queried, per-source fetch
//! limits, timeouts, and caching. The defaults match the behaviour of the
//! assistant's interactive use: all sources, 5 results each, 5 s deadline,
//! 1 h result cache.

use crate::error::SearchError;
use crate::types::Source;

/// Configuration for a knowledge search operation.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which sources to query. Queried concurrently; results are merged
    /// and ranked together.
    pub sources: Vec<Source>,
    /// Maximum number of results fetched *per source*. The merged,
    /// ranked sequence is not truncated.
    pub max_results: usize,
    /// Per-source request deadline in seconds. The fan-out applies this
    /// as a shared deadline, so aggregate latency is bounded by the
    /// slowest single source, not the sum.
    pub timeout_seconds: u64,
    /// How long cached result sets stay fresh, in seconds. Set to 0 to
    /// disable caching entirely.
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached result sets before eviction.
    pub cache_capacity: u64,
    /// Region appended by the locale-scoped handlers (local, jobs).
    pub default_region: String,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sources: Source::all().to_vec(),
            max_results: 5,
            timeout_seconds: 5,
            cache_ttl_seconds: 3600,
            cache_capacity: 100,
            default_region: "India".to_string(),
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `sources` must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.sources.is_empty() {
            return Err(SearchError::Config(
                "at least one source must be enabled".into(),
            ));
        }
        Ok(())
    }
}
