//! Error types for the lyra-search crate.
//!
//! All errors carry stable string messages suitable for display to users
//! and for programmatic handling. Search queries never appear in error
//! messages above trace level.

/// Errors that can occur during knowledge search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Every queried source failed. An empty result set with at least one
    /// healthy source is *not* this error; that just means no matches.
    #[error("all sources failed: {0}")]
    AllSourcesFailed(String),

    /// A source did not respond within the shared fan-out deadline.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// An HTTP request to a source failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A source response could not be parsed (JSON, HTML, or Atom).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for lyra-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_all_sources_failed() {
        let err = SearchError::AllSourcesFailed("Wikipedia: connection refused".into());
        assert_eq!(
            err.to_string(),
            "all sources failed: Wikipedia: connection refused"
        );
    }

    #[test]
    fn display_timeout() {
        let err = SearchError::Timeout("arXiv exceeded 5s deadline".into());
        assert_eq!(err.to_string(), "search timed out: arXiv exceeded 5s deadline");
    }

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection reset".into());
        assert_eq!(err.to_string(), "HTTP error: connection reset");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("unexpected JSON shape".into());
        assert_eq!(err.to_string(), "parse error: unexpected JSON shape");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("sources must not be empty".into());
        assert_eq!(err.to_string(), "config error: sources must not be empty");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
