//! Query intent detection via a prioritized keyword rule table.
//!
//! Classification walks [`RULES`] in declaration order and returns the
//! first intent whose keyword list matches; a query containing both
//! "latest" and "temperature" is therefore `News`, not `Weather`. The
//! tie-break is strictly positional in the table, never match count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The inferred purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    News,
    Academic,
    Statistics,
    Definition,
    Images,
    Videos,
    Local,
    Weather,
    Products,
    Jobs,
    Recipes,
    General,
}

impl Intent {
    /// The snake_case tag for this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Academic => "academic",
            Self::Statistics => "statistics",
            Self::Definition => "definition",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Local => "local",
            Self::Weather => "weather",
            Self::Products => "products",
            Self::Jobs => "jobs",
            Self::Recipes => "recipes",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prioritized classification rules. Order is the policy: earlier
/// entries win when a query matches several categories.
pub(crate) const RULES: &[(Intent, &[&str])] = &[
    (
        Intent::News,
        &["news", "latest", "recent", "today", "breaking", "current"],
    ),
    (
        Intent::Academic,
        &["research", "paper", "study", "academic", "journal", "thesis"],
    ),
    (
        Intent::Statistics,
        &["statistics", "data", "percent", "average", "rate", "number"],
    ),
    (
        Intent::Definition,
        &["define", "meaning", "what is", "definition", "explain"],
    ),
    (
        Intent::Images,
        &["image", "picture", "photo", "show me", "look like"],
    ),
    (
        Intent::Videos,
        &["video", "youtube", "watch", "tutorial", "how to"],
    ),
    (
        Intent::Local,
        &["near me", "nearby", "local", "in my area", "around"],
    ),
    (
        Intent::Weather,
        &["weather", "temperature", "forecast", "rain", "sunny"],
    ),
    (
        Intent::Products,
        &["buy", "price", "product", "shop", "store", "cost"],
    ),
    (
        Intent::Jobs,
        &["job", "hiring", "career", "position", "employment"],
    ),
    (
        Intent::Recipes,
        &["recipe", "cook", "ingredients", "prepare", "make"],
    ),
];

/// Classify a query into an [`Intent`]. Pure, no I/O.
///
/// Keyword membership is a substring test against the lowercased query,
/// so multi-word keywords like "what is" and "near me" match phrases.
pub fn detect(query: &str) -> Intent {
    let lowered = query.to_lowercase();
    for (intent, keywords) in RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *intent;
        }
    }
    Intent::General
}
