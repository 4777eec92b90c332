//! Core types for search results, sources, and result classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single result returned from a knowledge source.
///
/// Adapters construct results with `score` set to the source's fixed base
/// authority score; the ranker overwrites `score` exactly once with the
/// lexically boosted value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Which source (or specialized handler) produced this result.
    pub source: String,
    /// The title of the matched page, entity, book, or paper.
    pub title: String,
    /// A text snippet summarising the match. May be empty for some sources.
    pub snippet: String,
    /// Canonical URL for the result.
    pub url: String,
    /// Relevance score in `[0.0, 1.0]`: source authority plus lexical
    /// query-match density after ranking.
    pub score: f64,
    /// Category tag describing what kind of result this is.
    pub kind: ResultKind,
    /// Publication or event date, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Author names, when the source provides them (OpenLibrary).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Structured-data entity identifier (Wikidata Q-id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl SearchResult {
    /// Build a result for `source` with the source's base authority score
    /// and no optional fields. Adapters fill in extras afterwards.
    pub fn from_source(
        source: Source,
        kind: ResultKind,
        title: impl Into<String>,
        snippet: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            source: source.name().to_string(),
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
            score: source.base_score(),
            kind,
            date: None,
            author: None,
            entity_id: None,
        }
    }
}

/// Knowledge sources that lyra-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Wikipedia full-text search — encyclopedic articles.
    Wikipedia,
    /// Wikidata entity search — structured data with stable Q-ids.
    Wikidata,
    /// OpenLibrary — books and publications.
    OpenLibrary,
    /// DuckDuckGo HTML endpoint — general web results.
    DuckDuckGo,
    /// arXiv — academic preprints via the Atom export API.
    Arxiv,
    /// DBpedia SPARQL endpoint — linked data extracted from Wikipedia.
    DbPedia,
}

impl Source {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wikipedia => "Wikipedia",
            Self::Wikidata => "Wikidata",
            Self::OpenLibrary => "OpenLibrary",
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Arxiv => "arXiv",
            Self::DbPedia => "DBpedia",
        }
    }

    /// Fixed base relevance score reflecting source authority.
    ///
    /// The ranker adds lexical-match boosts on top of this, clamped to 1.0.
    pub fn base_score(&self) -> f64 {
        match self {
            Self::Wikipedia => 0.90,
            Self::Arxiv => 0.90,
            Self::Wikidata => 0.85,
            Self::DbPedia => 0.85,
            Self::OpenLibrary => 0.80,
            Self::DuckDuckGo => 0.75,
        }
    }

    /// Returns all available source variants.
    pub fn all() -> &'static [Source] {
        &[
            Self::Wikipedia,
            Self::Wikidata,
            Self::OpenLibrary,
            Self::DuckDuckGo,
            Self::Arxiv,
            Self::DbPedia,
        ]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category tag describing the kind of content a result carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Encyclopedia,
    StructuredData,
    Book,
    Web,
    AcademicPaper,
    LinkedData,
    News,
    Statistics,
    Definition,
    Image,
    Video,
    Local,
    Weather,
    Product,
    Job,
    Recipe,
}

impl ResultKind {
    /// The snake_case string tag for this kind, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encyclopedia => "encyclopedia",
            Self::StructuredData => "structured_data",
            Self::Book => "book",
            Self::Web => "web",
            Self::AcademicPaper => "academic_paper",
            Self::LinkedData => "linked_data",
            Self::News => "news",
            Self::Statistics => "statistics",
            Self::Definition => "definition",
            Self::Image => "image",
            Self::Video => "video",
            Self::Local => "local",
            Self::Weather => "weather",
            Self::Product => "product",
            Self::Job => "job",
            Self::Recipe => "recipe",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
