//! In-memory TTL cache for ranked result sets.
//!
//! Caches the final ranked sequence keyed by the (optimized query,
//! source set) pair. Built on [`moka`] for async-friendly caching with
//! TTL expiry and capacity-based eviction. The cache is owned by the
//! engine instance that created it; there is no process-wide state.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::types::{SearchResult, Source};

/// Instance-owned cache of ranked result sequences.
///
/// Stored sequences are wrapped in [`Arc`] so hits clone a pointer, not
/// the results. Entries are never mutated in place; recomputation after
/// expiry replaces the whole entry.
#[derive(Debug)]
pub struct ResultCache {
    inner: Cache<CacheKey, Arc<Vec<SearchResult>>>,
}

impl ResultCache {
    /// Create a cache with the given TTL and maximum entry count.
    pub fn new(ttl_seconds: u64, capacity: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(Duration::from_secs(ttl_seconds))
                .build(),
        }
    }

    /// Look up cached results. `Some` on a fresh hit, `None` on miss or
    /// after TTL expiry.
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<Vec<SearchResult>>> {
        self.inner.get(key).await
    }

    /// Store a ranked result sequence, replacing any previous entry.
    pub async fn insert(&self, key: CacheKey, results: Vec<SearchResult>) {
        self.inner.insert(key, Arc::new(results)).await;
    }
}

/// Composite cache key: normalized query + source-set hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Trimmed, lowercased query string (already optimized upstream).
    query: String,
    /// Order-independent hash of the source set, so `{Wikipedia, Arxiv}`
    /// and `{Arxiv, Wikipedia}` share an entry while differing source
    /// sets do not.
    source_hash: u64,
}

impl CacheKey {
    /// Build a deterministic key from a query and source list.
    pub fn new(query: &str, sources: &[Source]) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            source_hash: hash_sources(sources),
        }
    }
}

/// Hash a source set independently of ordering.
fn hash_sources(sources: &[Source]) -> u64 {
    let mut names: Vec<&str> = sources.iter().map(Source::name).collect();
    names.sort_unstable();
    names.dedup();
    let mut hasher = DefaultHasher::new();
    for name in names {
        name.hash(&mut hasher);
    }
    hasher.finish()
}
